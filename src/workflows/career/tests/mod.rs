mod common;
mod intake;
mod recommendations;
