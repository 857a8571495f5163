//! Test fixtures: seed data, random users and guaranteed teardown.
mod guard;
mod random;
mod seed;


pub use guard::{guarded, with_cleanup};
pub use random::{DEFAULT_AVATAR, random_first_name, random_user};
pub use seed::{SeededUsers, create_user, load_seed_users, remove_user};
