use rand::Rng;
use uuid::Uuid;
use crate::core::domain::IdScheme;

// URL-safe alphabet used for random book tokens
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
pub const TOKEN_LENGTH: usize = 16;

pub trait IdGenerator: Sync + Send {
    fn next_id(&self) -> String;
}

#[derive(Debug)]
pub struct TokenIdGenerator {
    length: usize,
}

impl TokenIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for TokenIdGenerator {
    fn default() -> Self {
        TokenIdGenerator::new(TOKEN_LENGTH)
    }
}

impl IdGenerator for TokenIdGenerator {
    fn next_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

pub fn create_id_generator(scheme: IdScheme) -> Box<dyn IdGenerator> {
    match scheme {
        IdScheme::Token => Box::new(TokenIdGenerator::default()),
        IdScheme::Uuid => Box::new(UuidIdGenerator),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use uuid::Uuid;
    use crate::core::domain::IdScheme;
    use crate::utils::ids::{create_id_generator, IdGenerator, TokenIdGenerator, TOKEN_ALPHABET, TOKEN_LENGTH};

    #[tokio::test]
    async fn test_should_generate_tokens() {
        let generator = TokenIdGenerator::default();
        let id = generator.next_id();
        assert_eq!(TOKEN_LENGTH, id.len());
        assert!(id.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
    }

    #[tokio::test]
    async fn test_should_not_repeat_tokens() {
        let generator = TokenIdGenerator::default();
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(1000, ids.len());
    }

    #[tokio::test]
    async fn test_should_create_uuid_generator() {
        let generator = create_id_generator(IdScheme::Uuid);
        assert!(Uuid::parse_str(generator.next_id().as_str()).is_ok());
    }
}
