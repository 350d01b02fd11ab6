//! Suspects and the clues that cite them.
//!
//! The registry is a fixed-size hash table of [`BUCKET_COUNT`] buckets. Each
//! bucket is a singly linked chain of suspects, and each suspect owns a singly
//! linked list of the clues associated with them. New suspects and new clues
//! are both prepended, so every listing shows the most recent entry first.
//!
//! The hash is the byte sum of the name modulo the bucket count. It collides
//! readily and is kept that way so bucket layout stays predictable.

use tracing::instrument;

use crate::domain::text::{ClueText, SuspectName};

/// Number of buckets in the table. Never changes.
pub const BUCKET_COUNT: usize = 10;

/// The bucket a suspect name hashes to.
///
/// Sums the bytes of the name and reduces modulo [`BUCKET_COUNT`]. For ASCII
/// names this matches summing character codes.
#[must_use]
pub fn bucket_of(name: &str) -> usize {
    name.bytes().map(usize::from).sum::<usize>() % BUCKET_COUNT
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueItem {
    clue: ClueText,
    next: Option<Box<Self>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Suspect {
    name: SuspectName,
    citations: usize,
    clues: Option<Box<ClueItem>>,
    next: Option<Box<Self>>,
}

impl Suspect {
    fn cite(&mut self, clue: ClueText) {
        let next = self.clues.take();
        self.clues = Some(Box::new(ClueItem { clue, next }));
        self.citations += 1;
    }

    fn chain(head: Option<&Self>) -> impl Iterator<Item = &Self> {
        std::iter::successors(head, |suspect| suspect.next.as_deref())
    }
}

/// A read-only view of one registered suspect.
#[derive(Debug, Clone, Copy)]
pub struct SuspectView<'a> {
    suspect: &'a Suspect,
    bucket: usize,
}

impl<'a> SuspectView<'a> {
    /// The suspect's name.
    #[must_use]
    pub const fn name(&self) -> &'a SuspectName {
        &self.suspect.name
    }

    /// How many clue associations cite this suspect.
    #[must_use]
    pub const fn citations(&self) -> usize {
        self.suspect.citations
    }

    /// The bucket this suspect lives in.
    #[must_use]
    pub const fn bucket(&self) -> usize {
        self.bucket
    }

    /// The associated clues, most recent first. Duplicates are kept.
    pub fn clues(&self) -> impl Iterator<Item = &'a ClueText> + 'a {
        let suspect = self.suspect;
        std::iter::successors(suspect.clues.as_deref(), |item| item.next.as_deref())
            .map(|item| &item.clue)
    }
}

/// Counts of what [`SuspectRegistry::teardown`] released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Released {
    /// Suspect nodes released.
    pub suspects: usize,
    /// Clue list items released.
    pub clues: usize,
}

/// A fixed-size hash table from suspect names to their cited clues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspectRegistry {
    buckets: [Option<Box<Suspect>>; BUCKET_COUNT],
}

impl SuspectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a clue with a suspect.
    ///
    /// A known suspect gets the clue prepended to their list and their
    /// citation count bumped. An unknown suspect is created with a single
    /// citation and prepended to their bucket's chain.
    ///
    /// Returns the suspect's citation count after the association.
    #[instrument(level = "debug", skip_all, fields(suspect = %suspect, clue = %clue))]
    pub fn insert_association(&mut self, clue: ClueText, suspect: SuspectName) -> usize {
        let bucket = bucket_of(&suspect);

        if let Some(existing) = self.entry_mut(bucket, &suspect) {
            existing.cite(clue);
            tracing::trace!(bucket, citations = existing.citations, "cited known suspect");
            return existing.citations;
        }

        let next = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(Suspect {
            name: suspect,
            citations: 1,
            clues: Some(Box::new(ClueItem { clue, next: None })),
            next,
        }));
        tracing::trace!(bucket, "registered new suspect");
        1
    }

    fn entry_mut(&mut self, bucket: usize, name: &str) -> Option<&mut Suspect> {
        let mut cursor = self.buckets[bucket].as_deref_mut();
        while let Some(suspect) = cursor {
            if suspect.name.as_str() == name {
                return Some(suspect);
            }
            cursor = suspect.next.as_deref_mut();
        }
        None
    }

    /// Looks up a suspect by exact, case-sensitive name.
    ///
    /// An unknown name is an ordinary outcome and yields `None`.
    #[must_use]
    pub fn find_suspect(&self, name: &str) -> Option<SuspectView<'_>> {
        let bucket = bucket_of(name);
        Suspect::chain(self.buckets[bucket].as_deref())
            .find(|suspect| suspect.name.as_str() == name)
            .map(|suspect| SuspectView { suspect, bucket })
    }

    /// Iterates over every suspect, bucket by bucket, each chain in stored
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = SuspectView<'_>> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(bucket, head)| {
                Suspect::chain(head.as_deref()).map(move |suspect| SuspectView { suspect, bucket })
            })
    }

    /// The suspects stored in one bucket, in chain order.
    ///
    /// # Panics
    ///
    /// Panics if `bucket` is not below [`BUCKET_COUNT`].
    pub fn bucket(&self, bucket: usize) -> impl Iterator<Item = SuspectView<'_>> + '_ {
        Suspect::chain(self.buckets[bucket].as_deref())
            .map(move |suspect| SuspectView { suspect, bucket })
    }

    /// The suspect with the most citations.
    ///
    /// Ties go to the suspect found first: lower bucket, then earlier in the
    /// chain. Returns `None` when nobody is registered.
    #[must_use]
    pub fn most_cited(&self) -> Option<SuspectView<'_>> {
        self.iter().fold(None, |best, candidate| match best {
            Some(current) if current.citations() >= candidate.citations() => Some(current),
            _ => Some(candidate),
        })
    }

    /// The number of registered suspects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }

    /// The sum of every suspect's citation count.
    #[must_use]
    pub fn total_citations(&self) -> usize {
        self.iter().map(|suspect| suspect.citations()).sum()
    }

    /// Releases every bucket, freeing each suspect's clue list before the
    /// suspect itself.
    #[must_use]
    pub fn teardown(mut self) -> Released {
        let mut released = Released::default();
        for head in &mut self.buckets {
            let mut chain = head.take();
            while let Some(mut suspect) = chain {
                chain = suspect.next.take();

                let mut items = suspect.clues.take();
                while let Some(mut item) = items {
                    items = item.next.take();
                    released.clues += 1;
                }

                released.suspects += 1;
            }
        }
        released
    }
}
