use crate::error::{FieldbookError, Result};

/// A record held in a [`Table`], addressed by a positive integer id.
pub trait Record: Clone {
    /// Human-readable record name used in not-found errors.
    const KIND: &'static str;

    fn id(&self) -> u32;

    fn set_id(&mut self, id: u32);
}

/// Where a new row goes in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Ordered in-memory table. Ids are assigned as the current maximum plus one.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Fails once the highest id already in the table is `u32::MAX`.
    pub fn next_id(&self) -> Result<u32> {
        let highest = self.rows.iter().map(Record::id).max().unwrap_or(0);
        highest.checked_add(1).ok_or_else(|| {
            FieldbookError::Validation(format!(
                "{} ids exhausted: highest existing ID is {}",
                T::KIND,
                highest
            ))
        })
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.rows.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: u32) -> Result<&T> {
        self.rows
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| FieldbookError::not_found(T::KIND, id))
    }

    pub fn get_mut(&mut self, id: u32) -> Result<&mut T> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| FieldbookError::not_found(T::KIND, id))
    }

    /// Assigns the next id to `row`, stores it and returns a copy.
    pub fn insert(&mut self, mut row: T, placement: Placement) -> Result<T> {
        row.set_id(self.next_id()?);
        let stored = row.clone();
        match placement {
            Placement::Front => self.rows.insert(0, row),
            Placement::Back => self.rows.push(row),
        }
        Ok(stored)
    }

    pub fn remove(&mut self, id: u32) -> Result<T> {
        let index = self
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| FieldbookError::not_found(T::KIND, id))?;
        Ok(self.rows.remove(index))
    }

    /// Removes every row matching `predicate`, returning the removed rows.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.rows)
            .into_iter()
            .partition(|r| predicate(r));
        self.rows = kept;
        removed
    }

    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|r| predicate(r)).cloned().collect()
    }
}
