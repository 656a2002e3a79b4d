mod cipher;
mod error;
mod token;

pub use {cipher::*, error::*, token::*};
