//! Repository Layer
//!
//! Data access abstractions and their SQLite implementations.

mod breed_repo;
mod db;
mod dog_repo;
mod seed;
mod traits;


pub use breed_repo::BreedRepository;
pub use db::{init_db, SharedConnection};
pub use dog_repo::DogRepository;
pub use seed::seed_demo_data;
pub use traits::{DogQueries, Repository};
