pub mod identity;
pub mod member_view;
pub mod meta;
pub mod project;
pub mod serviceaccount;
