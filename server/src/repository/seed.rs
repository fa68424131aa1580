//! Demo data for an empty database.

use super::breed_repo::BreedRepository;
use super::dog_repo::DogRepository;
use super::traits::Repository;
use crate::domain::{Breed, Dog, DogStatus, DomainResult};

const BREEDS: &[(&str, &str)] = &[
    ("Beagle", "Friendly scent hound with a big voice."),
    ("Border Collie", "Tireless herder that needs a job to do."),
    ("Dachshund", "Short legs, long body, brave heart."),
    ("French Bulldog", "Compact, playful and a little stubborn."),
    ("German Shepherd", "Loyal, smart and eager to work."),
    ("Golden Retriever", "Gentle family dog that loves water."),
    ("Labrador Retriever", "Outgoing, even-tempered companion."),
    ("Poodle", "Clever and athletic, low-shedding coat."),
    ("Mixed Breed", "A little bit of everything."),
];

/// (name, breed, age, gender, description, status)
const DOGS: &[(&str, &str, u32, &str, &str, DogStatus)] = &[
    ("Buddy", "Golden Retriever", 3, "Male", "Buddy greets everyone with a wagging tail.", DogStatus::Available),
    ("Rex", "French Bulldog", 2, "Male", "Rex snores loudly and loves couch naps.", DogStatus::Available),
    ("Luna", "Labrador Retriever", 4, "Female", "Luna will fetch until your arm gives out.", DogStatus::Available),
    ("Scout", "Border Collie", 1, "Female", "Scout is learning new tricks every day.", DogStatus::Pending),
    ("Max", "German Shepherd", 5, "Male", "Max is calm, protective and house-trained.", DogStatus::Available),
    ("Pickles", "Dachshund", 7, "Female", "Pickles prefers short walks and long naps.", DogStatus::Available),
    ("Biscuit", "Mixed Breed", 2, "Male", "Biscuit has endless energy and a crooked ear.", DogStatus::Available),
    ("Coco", "Poodle", 6, "Female", "Coco is gentle with kids and other dogs.", DogStatus::Adopted),
];

/// Insert the demo breeds and dogs unless breeds already exist.
/// Returns the number of dogs inserted.
pub async fn seed_demo_data(breeds: &BreedRepository, dogs: &DogRepository) -> DomainResult<usize> {
    if !breeds.list().await?.is_empty() {
        tracing::debug!("database already populated, skipping seed");
        return Ok(0);
    }

    for (name, description) in BREEDS {
        breeds.create(&Breed::with_description(0, *name, *description)).await?;
    }

    let mut inserted = 0;
    for (name, breed_name, age, gender, description, status) in DOGS {
        let Some(breed) = breeds.find_by_name(breed_name).await? else {
            tracing::warn!("seed dog {} references unknown breed {}", name, breed_name);
            continue;
        };
        let dog = Dog::new(0, *name, breed.id, *age, *gender)
            .with_description(*description)
            .with_status(*status);
        dogs.create(&dog).await?;
        inserted += 1;
    }

    tracing::info!("seeded {} breeds and {} dogs", BREEDS.len(), inserted);
    Ok(inserted)
}
