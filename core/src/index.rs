use crate::error::{IndexError, Result};
use crate::record::Record;
use crate::tokenizer::tokenize_all;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub type TermId = u32;
/// Zero-based position of a record in the dataset.
pub type Position = u32;

/// Token -> posting list, with tokens kept in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    postings: Vec<Vec<Position>>, // indexed by TermId, in insertion order
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub tokens: usize,
    pub postings: usize,
    /// Records that produced no tokens and so appear in no posting list.
    pub empty_records: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Append `pos` to the posting list of `token`, creating it if needed.
    pub fn add(&mut self, token: &str, pos: Position) {
        let tid = self.term_id(token);
        self.postings[tid as usize].push(pos);
    }

    fn term_id(&mut self, token: &str) -> TermId {
        if let Some(&tid) = self.dictionary.get(token) {
            return tid;
        }
        let tid = self.terms.len() as TermId;
        self.dictionary.insert(token.to_owned(), tid);
        self.terms.push(token.to_owned());
        self.postings.push(Vec::new());
        tid
    }

    /// Index every token of the record's text sources. Returns the number of tokens added.
    pub fn add_record(&mut self, pos: Position, record: &Record) -> usize {
        let sources = record.text_sources();
        let tokens = tokenize_all(sources.iter().map(|s| &**s));
        for token in &tokens {
            self.add(token, pos);
        }
        tokens.len()
    }

    pub fn get(&self, token: &str) -> Option<&[Position]> {
        self.dictionary.get(token).map(|&tid| self.postings[tid as usize].as_slice())
    }

    pub fn contains(&self, token: &str) -> bool { self.dictionary.contains_key(token) }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Total entries across all posting lists.
    pub fn num_postings(&self) -> usize { self.postings.iter().map(Vec::len).sum() }

    /// Tokens with their posting lists, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Position])> + '_ {
        self.terms.iter().map(String::as_str).zip(self.postings.iter().map(Vec::as_slice))
    }

    /// Postings that point past the end of a dataset of `num_records` records.
    pub fn out_of_range(&self, num_records: usize) -> Vec<(&str, Position)> {
        self.iter()
            .flat_map(|(term, plist)| plist.iter().map(move |&p| (term, p)))
            .filter(|&(_, p)| p as usize >= num_records)
            .collect()
    }
}

/// Build the index over `records`, where each record's position is its offset in the slice.
pub fn build_index(records: &[Record]) -> Result<(InvertedIndex, IndexStats)> {
    if records.len() as u64 > Position::MAX as u64 + 1 {
        return Err(IndexError::TooManyRecords { count: records.len() });
    }
    let mut index = InvertedIndex::new();
    let mut stats = IndexStats { records: records.len(), ..IndexStats::default() };
    for (i, record) in records.iter().enumerate() {
        let added = index.add_record(i as Position, record);
        if added == 0 {
            stats.empty_records += 1;
        }
    }
    stats.tokens = index.len();
    stats.postings = index.num_postings();
    tracing::debug!(records = stats.records, tokens = stats.tokens, postings = stats.postings, "built index");
    Ok((index, stats))
}

impl Serialize for InvertedIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (term, plist) in self.iter() {
            map.serialize_entry(term, plist)?;
        }
        map.end()
    }
}

struct IndexVisitor;

impl<'de> Visitor<'de> for IndexVisitor {
    type Value = InvertedIndex;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of tokens to arrays of record positions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<InvertedIndex, A::Error> {
        let mut index = InvertedIndex::new();
        while let Some((term, plist)) = access.next_entry::<String, Vec<Position>>()? {
            let tid = index.term_id(&term);
            index.postings[tid as usize].extend(plist);
        }
        Ok(index)
    }
}

impl<'de> Deserialize<'de> for InvertedIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(IndexVisitor)
    }
}
