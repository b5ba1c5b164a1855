pub mod post_category;
