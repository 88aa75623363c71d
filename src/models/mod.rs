pub mod assignments;
pub mod submissions;
pub mod users;
