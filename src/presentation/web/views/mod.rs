mod images;

pub use images::ImageView;
