pub mod shorten;
