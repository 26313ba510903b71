use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use undo_stack::{Command, Error, UndoStack};

type Log = Rc<RefCell<Vec<String>>>;

fn traced(log: &Log, name: &'static str) -> Command {
    let (a, b) = (log.clone(), log.clone());
    Command::new(
        move || a.borrow_mut().push(format!("redo {name}")),
        move || b.borrow_mut().push(format!("undo {name}")),
    )
}

fn add(i: &Rc<Cell<i32>>, n: i32) -> Command {
    let (a, b) = (i.clone(), i.clone());
    Command::new(move || a.set(a.get() + n), move || b.set(b.get() - n))
}

#[test]
fn commit() {
    let i = Rc::new(Cell::new(0));
    let mut stack = UndoStack::new();
    let mut tx = stack.transaction().unwrap();
    assert!(tx.is_pending());
    tx.begin().unwrap();
    assert!(tx.is_in_progress());
    tx.stack().execute(add(&i, 1)).unwrap();
    tx.stack().execute(add(&i, 1)).unwrap();
    assert_eq!(tx.stack().len(), 0);
    tx.end();
    assert!(tx.is_pending());
    assert_eq!(i.get(), 2);
    assert_eq!(stack.len(), 1);

    stack.undo();
    assert_eq!(i.get(), 0);
    stack.redo();
    assert_eq!(i.get(), 2);
}

#[test]
fn flattening_order() {
    let log = Log::default();
    let mut stack = UndoStack::new();
    stack.record(traced(&log, "before")).unwrap();
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    for name in ["a", "b", "c"] {
        tx.stack().record(traced(&log, name)).unwrap();
    }
    tx.end();
    assert_eq!(stack.len(), 2);

    stack.undo();
    stack.redo();
    assert_eq!(
        *log.borrow(),
        ["undo c", "undo b", "undo a", "redo a", "redo b", "redo c"]
    );
}

#[test]
fn empty_transaction() {
    let mut stack = UndoStack::new();
    stack.record(Command::new(|| (), || ())).unwrap();
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.end();
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pointer(), Some(0));
}

#[test]
fn cancel() {
    let log = Log::default();
    let mut stack = UndoStack::new();
    stack.record(traced(&log, "kept")).unwrap();
    stack.record(traced(&log, "undone")).unwrap();
    stack.undo();
    log.borrow_mut().clear();

    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.stack().execute(traced(&log, "a")).unwrap();
    tx.stack().execute(traced(&log, "b")).unwrap();
    tx.cancel();
    assert!(tx.is_pending());
    assert_eq!(*log.borrow(), ["redo a", "redo b", "undo b", "undo a"]);
    assert_eq!(stack.len(), 2);
    assert!(stack.can_undo());
    assert!(stack.can_redo());

    // The next transaction starts from an empty buffer.
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.end();
    assert_eq!(stack.len(), 2);
}

#[test]
fn commit_rebases() {
    let i = Rc::new(Cell::new(0));
    let mut stack = UndoStack::new();
    stack.execute(add(&i, 1)).unwrap();
    stack.execute(add(&i, 2)).unwrap();
    stack.undo();

    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.stack().execute(add(&i, 10)).unwrap();
    // Redoable entries survive until the transaction is committed.
    assert!(tx.stack().can_redo());
    tx.end();
    assert!(!stack.can_redo());
    assert_eq!(stack.len(), 2);
    assert_eq!(i.get(), 11);
}

#[test]
fn begin_is_not_reentrant() {
    let log = Log::default();
    let mut stack = UndoStack::new();
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.stack().record(traced(&log, "a")).unwrap();
    assert_eq!(tx.begin(), Err(Error::TransactionInProgress));
    assert!(tx.is_in_progress());
    tx.stack().record(traced(&log, "b")).unwrap();
    tx.end();
    assert_eq!(stack.len(), 1);
    stack.undo();
    assert_eq!(*log.borrow(), ["undo b", "undo a"]);
}

#[test]
fn limit_applies_to_commit() {
    let mut stack = UndoStack::builder().limit(2).build().unwrap();
    stack.record(Command::new(|| (), || ())).unwrap();
    stack.record(Command::new(|| (), || ())).unwrap();
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.stack().record(Command::new(|| (), || ())).unwrap();
    tx.stack().record(Command::new(|| (), || ())).unwrap();
    tx.end();
    assert_eq!(stack.len(), 2);
    assert!(stack.is_full());
    assert_eq!(stack.pointer(), Some(1));
}

#[test]
fn reset_keeps_open_transaction() {
    let log = Log::default();
    let mut stack = UndoStack::new();
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.stack().record(traced(&log, "a")).unwrap();
    tx.stack().reset();
    assert!(tx.is_in_progress());
    tx.end();
    assert_eq!(stack.len(), 1);
}

#[test]
fn disabled() {
    let mut stack = UndoStack::builder().transactions(false).build().unwrap();
    assert!(!stack.has_transactions());
    assert!(stack.transaction().is_none());
    stack.record(Command::new(|| (), || ())).unwrap();
    assert!(!stack.is_in_transaction());
    assert_eq!(stack.len(), 1);
}

#[test]
fn panicking_cancel_keeps_transaction_open() {
    let log = Log::default();
    let mut stack = UndoStack::new();
    let mut tx = stack.transaction().unwrap();
    tx.begin().unwrap();
    tx.stack().record(traced(&log, "a")).unwrap();
    tx.stack()
        .record(Command::new(|| (), || panic!("undo failed")))
        .unwrap();
    assert!(panic::catch_unwind(AssertUnwindSafe(|| tx.cancel())).is_err());
    assert!(tx.is_in_progress());
    assert!(log.borrow().is_empty());

    tx.end();
    assert!(tx.is_pending());
    assert_eq!(stack.len(), 1);
}
