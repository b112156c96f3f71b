mod common;
mod contractor;
