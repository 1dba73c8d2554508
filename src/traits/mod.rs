mod font_type;

pub use font_type::{ FontType, is_invisible_control };
