pub mod learning;
