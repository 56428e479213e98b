pub mod contact;
pub mod experience;
pub mod projects;
pub mod skills;
