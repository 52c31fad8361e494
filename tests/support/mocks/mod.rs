// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod failing;
pub mod store;
pub mod time;

pub use failing::FailingArticleRead;
pub use store::InMemoryStore;
pub use time::{FixedClock, fixed_now};
