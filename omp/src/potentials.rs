pub mod an_cai;
pub mod bojowald;
pub mod daehnick;
pub mod koning_delaroche;
pub mod li_liang_cai;
pub mod potential_factory;
