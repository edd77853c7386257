pub mod add_blog;

pub use add_blog::{AddBlogRequest, NewBlog};
