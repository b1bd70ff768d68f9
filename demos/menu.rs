//! Drives an `AvlIndex` from a fixed script of menu commands.
//!
//! Run with `RUST_LOG=avl_index=trace` to see the rotations.

use avl_index::{AvlIndex, DeleteOutcome, InsertOutcome, Order};
use tracing_subscriber::EnvFilter;

/// Ends a batch of keys to insert.
const SENTINEL: i32 = -999;

enum Command {
    Insert(&'static [i32]),
    Delete(i32),
    Search(i32),
    Traverse(Order),
}

const SCRIPT: &[Command] = &[
    Command::Insert(&[9, 5, 10, 0, 6, 11, -1, 1, 2, 5, SENTINEL, 42]),
    Command::Traverse(Order::InOrder),
    Command::Traverse(Order::PreOrder),
    Command::Delete(10),
    Command::Delete(10),
    Command::Search(6),
    Command::Search(10),
    Command::Traverse(Order::PreOrder),
    Command::Traverse(Order::PostOrder),
];

fn insert_batch(index: &mut AvlIndex, keys: &[i32]) {
    for &key in keys.iter().take_while(|&&key| key != SENTINEL) {
        match index.insert(key) {
            InsertOutcome::Inserted => println!("{key}: inserted"),
            InsertOutcome::DuplicateRejected => println!("{key}: duplicate, not inserted"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut index = AvlIndex::new();
    for command in SCRIPT {
        match command {
            Command::Insert(keys) => insert_batch(&mut index, keys),
            Command::Delete(key) => match index.delete(*key) {
                DeleteOutcome::Deleted => println!("{key}: deleted"),
                DeleteOutcome::NotFound => println!("{key}: not found"),
            },
            Command::Search(key) => {
                let found = if index.contains(*key) { "found" } else { "not found" };
                println!("{key}: {found}");
            }
            Command::Traverse(order) => {
                let keys: Vec<String> = index.traverse(*order).map(|key| key.to_string()).collect();
                println!("{order}: {}", keys.join(" "));
            }
        }
    }
}
