pub mod catcher;
