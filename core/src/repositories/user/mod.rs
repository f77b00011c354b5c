pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

#[cfg(test)]
mod mock;


pub use r#trait::UserRepository;

#[cfg(test)]
pub use mock::MockUserRepository;
