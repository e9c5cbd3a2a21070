pub mod icons;
pub mod navigation;
