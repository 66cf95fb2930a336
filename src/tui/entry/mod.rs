pub mod alertbox;
pub mod confirmbox;
pub mod formbox;
pub mod helpbox;
pub mod listitems;
