#![no_std]

pub mod mt19937;
pub mod recovery;
pub mod stream;

pub use mt19937::{temper, Mt19937};
pub use recovery::{clone, clone_from_outputs, recover_seed, untemper};
pub use stream::first_divergence;

#[derive(Debug)]
pub enum Error {
    InvalidStateLength,
}
