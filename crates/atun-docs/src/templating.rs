pub mod maud_ext;
