use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::type_name;
use core::mem::size_of;

use crate::config::SlotVecConfig;
use crate::error::SlotVecError;
use crate::iter::{SlotVecIter, SlotVecRevIter};
use crate::logging;

const UNNAMED: &str = "Unnamed List";

/// A growable vector of fixed-size slots with doubling growth
#[derive(Debug)]
pub struct SlotVec<T: Copy> {
    slots: Vec<T>,
    capacity: usize,
    initial_capacity: usize,
    label: Option<String>,
    type_tag: &'static str,
}

/// Reserves room for `total` slots in `slots`, reporting allocator refusal.
fn reserve_slots<T>(slots: &mut Vec<T>, total: usize) -> Result<(), SlotVecError> {
    let additional = total.saturating_sub(slots.len());
    slots.try_reserve_exact(additional).map_err(|_| {
        logging::debug!("allocation of {} slots failed", total);
        SlotVecError::AllocationFailed { requested: total }
    })
}

impl<T: Copy> SlotVec<T> {
    /// Creates a new `SlotVec` with the default initial capacity (8).
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::AllocationFailed` if the initial slots cannot be
    /// allocated.
    pub fn new() -> Result<Self, SlotVecError> {
        Self::with_config(SlotVecConfig::new())
    }

    /// Creates a new `SlotVec` with the default initial capacity and a
    /// diagnostic name.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::AllocationFailed` if the initial slots cannot be
    /// allocated.
    pub fn with_label(label: impl Into<String>) -> Result<Self, SlotVecError> {
        Self::with_config(SlotVecConfig::new().with_label(label))
    }

    /// Creates a new `SlotVec` from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::InvalidConfiguration` if the configuration does
    /// not validate, or `SlotVecError::AllocationFailed` if the initial slots
    /// cannot be allocated.
    pub fn with_config(config: SlotVecConfig) -> Result<Self, SlotVecError> {
        config.validate()?;

        let mut slots = Vec::new();
        reserve_slots(&mut slots, config.initial_capacity)?;

        logging::trace!(
            "initialized {:?} with {} slots of {} bytes",
            config.label,
            config.initial_capacity,
            size_of::<T>()
        );

        Ok(Self {
            slots,
            capacity: config.initial_capacity,
            initial_capacity: config.initial_capacity,
            label: config.label,
            type_tag: type_name::<T>(),
        })
    }

    /// Creates a new `SlotVec` holding a copy of `values`, in order.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the slots cannot be reserved.
    pub fn from_slice(values: &[T]) -> Result<Self, SlotVecError> {
        let mut slot_vec = Self::new()?;
        slot_vec.add_all(values)?;
        Ok(slot_vec)
    }

    /// Releases the storage and resets the container to its zero state.
    ///
    /// Calling this more than once is harmless. A disposed container can be
    /// reused; the next insertion allocates the initial capacity again.
    pub fn dispose(&mut self) {
        logging::trace!("disposing {} ({} slots)", self.name(), self.capacity);
        self.slots = Vec::new();
        self.capacity = 0;
        self.label = None;
        self.type_tag = "";
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots allocated, live or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Width of one slot in bytes.
    #[must_use]
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Bytes occupied by live elements.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.len() * self.element_size()
    }

    /// Bytes allocated for all slots.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.capacity * self.element_size()
    }

    /// Diagnostic name of the container.
    ///
    /// A leading `&` is not part of the name. Returns `"Unnamed List"` when no
    /// label was given or the container has been disposed.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.label.as_deref() {
            Some(label) => label.strip_prefix('&').unwrap_or(label),
            None => UNNAMED,
        }
    }

    /// Name of the element type, empty once disposed.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        self.type_tag
    }

    /// Makes room for `additional` more elements, doubling the capacity
    /// until it fits. Does nothing to the container on failure.
    fn ensure_capacity(&mut self, additional: usize) -> Result<(), SlotVecError> {
        let required =
            self.len()
                .checked_add(additional)
                .ok_or(SlotVecError::CapacityOverflow {
                    capacity: self.capacity,
                })?;
        if required <= self.capacity {
            return Ok(());
        }

        let mut new_capacity = if self.capacity == 0 {
            self.initial_capacity
        } else {
            self.capacity
        };
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(SlotVecError::CapacityOverflow {
                    capacity: self.capacity,
                })?;
        }

        reserve_slots(&mut self.slots, new_capacity)?;
        logging::debug!(
            "{}: grew from {} to {} slots",
            self.name(),
            self.capacity,
            new_capacity
        );

        if self.capacity == 0 {
            self.type_tag = type_name::<T>();
        }
        self.capacity = new_capacity;
        Ok(())
    }

    fn check_bounds(&self, index: usize) -> Result<(), SlotVecError> {
        if index >= self.len() {
            logging::trace!("{}: index {} out of bounds", self.name(), index);
            Err(SlotVecError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Appends an element at the end.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::AllocationFailed` or
    /// `SlotVecError::CapacityOverflow` if growth is needed and fails.
    pub fn push(&mut self, value: T) -> Result<(), SlotVecError> {
        self.ensure_capacity(1)?;
        self.slots.push(value);
        Ok(())
    }

    /// Appends every element of `values`, in order.
    ///
    /// Capacity grows exactly as it would for the same number of `push`
    /// calls. Either all elements are appended or none are.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if growth is needed and fails.
    pub fn add_all(&mut self, values: &[T]) -> Result<(), SlotVecError> {
        self.ensure_capacity(values.len())?;
        self.slots.extend_from_slice(values);
        Ok(())
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::InsertOutOfBounds` if `index > len()`, or an
    /// allocation error if growth fails.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), SlotVecError> {
        if index > self.len() {
            logging::trace!("{}: insert position {} out of bounds", self.name(), index);
            return Err(SlotVecError::InsertOutOfBounds {
                index,
                length: self.len(),
            });
        }
        self.ensure_capacity(1)?;
        self.slots.insert(index, value);
        Ok(())
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Gets the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, SlotVecError> {
        self.check_bounds(index)?;
        self.slots
            .get(index)
            .ok_or(SlotVecError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Address of the slot at `index`, or `None` if it is not live.
    ///
    /// The pointer is invalidated by any growth of the container.
    #[must_use]
    pub fn slot_ptr(&self, index: usize) -> Option<*const T> {
        self.slots.get(index).map(core::ptr::from_ref)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SlotVecError> {
        self.check_bounds(index)?;
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Result<T, SlotVecError> {
        self.check_bounds(index)?;
        Ok(self.slots.remove(index))
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.slots.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.slots.last()
    }

    /// Drops all live elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Position of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_by(|slot| slot == value)
    }

    /// Position of the first element matching `predicate`.
    #[must_use]
    pub fn index_of_by<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.slots.iter().position(predicate)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::ValueNotFound` if no element matches.
    pub fn remove_value(&mut self, value: &T) -> Result<T, SlotVecError>
    where
        T: PartialEq,
    {
        self.remove_first_by(|slot| slot == value)
    }

    /// Removes the first element matching `predicate` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::ValueNotFound` if no element matches.
    pub fn remove_first_by<F>(&mut self, predicate: F) -> Result<T, SlotVecError>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.index_of_by(predicate).ok_or_else(|| {
            logging::trace!("{}: value not found", self.name());
            SlotVecError::ValueNotFound
        })?;
        self.remove(index)
    }

    /// Fresh, empty container sharing this one's initial capacity.
    fn fresh(&self, label: Option<String>) -> Result<Self, SlotVecError> {
        Self::with_config(SlotVecConfig {
            initial_capacity: self.initial_capacity,
            label,
        })
    }

    /// Re-initializes `dest` with copies of the elements matching
    /// `predicate`, in order. `dest` keeps its label.
    ///
    /// On error `dest` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if `dest` cannot be allocated or grown.
    pub fn filter_into<F>(&self, dest: &mut Self, predicate: F) -> Result<(), SlotVecError>
    where
        F: FnMut(&T) -> bool,
    {
        let mut sublist = self.fresh(dest.label.clone())?;
        sublist.collect_matching(self, predicate)?;
        *dest = sublist;
        Ok(())
    }

    /// New container holding copies of the elements matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the new container cannot be allocated
    /// or grown.
    pub fn filtered<F>(&self, predicate: F) -> Result<Self, SlotVecError>
    where
        F: FnMut(&T) -> bool,
    {
        let mut sublist = self.fresh(None)?;
        sublist.collect_matching(self, predicate)?;
        Ok(sublist)
    }

    fn collect_matching<F>(&mut self, source: &Self, mut predicate: F) -> Result<(), SlotVecError>
    where
        F: FnMut(&T) -> bool,
    {
        for value in source {
            if predicate(value) {
                self.push(*value)?;
            }
        }
        Ok(())
    }

    /// Copies the live elements into a new, independently owned array.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::AllocationFailed` if the array cannot be
    /// allocated.
    pub fn to_array(&self) -> Result<Box<[T]>, SlotVecError> {
        let mut array = Vec::new();
        reserve_slots(&mut array, self.len())?;
        array.extend_from_slice(&self.slots);
        Ok(array.into_boxed_slice())
    }

    /// Re-initializes the container and appends every element of `values`.
    ///
    /// The label is kept. On error the container is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the slots cannot be reserved.
    pub fn load_from_array(&mut self, values: &[T]) -> Result<(), SlotVecError> {
        let mut loaded = self.fresh(self.label.clone())?;
        loaded.add_all(values)?;
        *self = loaded;
        Ok(())
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> SlotVecIter<'_, T> {
        self.into_iter()
    }

    /// Returns a reverse iterator over the live elements.
    #[must_use]
    pub fn iter_rev(&self) -> SlotVecRevIter<'_, T> {
        SlotVecRevIter::new(self.as_slice())
    }
}

impl<T: Copy> TryFrom<&[T]> for SlotVec<T> {
    type Error = SlotVecError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}
