pub use self::split::IntersectResult;

mod split;
mod split_segment;
mod split_triangle;
