mod common;
mod grouping;
mod views;
