use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Quote;

// Built-in quotes served when FavQs can't be used
lazy_static! {
    static ref SAMPLE_QUOTES: Vec<Quote> = vec![
        sample(1, "Life isn't about getting and having, it's about giving and being.", "Kevin Kruse", &["life", "inspirational"]),
        sample(2, "Whatever the mind of man can conceive and believe, it can achieve.", "Napoleon Hill", &["inspirational"]),
        sample(3, "Strive not to be a success, but rather to be of value.", "Albert Einstein", &["success", "value"]),
        sample(4, "Two roads diverged in a wood, and I\u{2014}I took the one less traveled by, And that has made all the difference.", "Robert Frost", &["life", "journey"]),
        sample(5, "I attribute my success to this: I never gave or took any excuse.", "Florence Nightingale", &["success"]),
        sample(6, "You miss 100% of the shots you don't take.", "Wayne Gretzky", &["inspiration"]),
        sample(7, "The most difficult thing is the decision to act, the rest is merely tenacity.", "Amelia Earhart", &["action", "decision"]),
        sample(8, "Every strike brings me closer to the next home run.", "Babe Ruth", &["perseverance"]),
        sample(9, "Definiteness of purpose is the starting point of all achievement.", "W. Clement Stone", &["purpose", "achievement"]),
        sample(10, "Life is what happens to you while you're busy making other plans.", "John Lennon", &["life", "planning"]),
    ];
}

fn sample(id: u64, body: &str, author: &str, tags: &[&str]) -> Quote {
    Quote {
        id,
        body: body.to_string(),
        author: author.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

// Read-only view over the built-in quotes
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStore;

impl SampleStore {
    pub fn all(&self) -> &'static [Quote] {
        &SAMPLE_QUOTES
    }

    // Quotes carrying `tag` (case-insensitive), in store order
    pub fn matching(&self, tag: &str) -> Vec<Quote> {
        self.all().iter().filter(|q| q.has_tag(tag)).cloned().collect()
    }

    // Shuffle the candidates (all, or those matching `tag`) and keep at most `count`
    pub fn select<R: Rng + ?Sized>(
        &self,
        tag: Option<&str>,
        count: usize,
        rng: &mut R,
    ) -> Vec<Quote> {
        let mut picked = match tag {
            Some(tag) => self.matching(tag),
            None => self.all().to_vec(),
        };
        picked.shuffle(rng);
        picked.truncate(count.min(picked.len()));
        picked
    }
}
