//! Persistent LIFO stack.
//!
//! A singly-linked list of immutable, reference-counted nodes. Pushing
//! allocates one node that points at the old head, popping hands out the
//! old tail. Nothing is ever mutated in place, so every stack value stays
//! valid for as long as someone holds it.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::sync::Arc;

struct Node<T> {
    item: T,
    next: Option<Arc<Node<T>>>,
}

/// Immutable stack with structural sharing.
///
/// `push` and `pop` return new stacks and leave `self` untouched. Both are
/// O(1) and share every node below the top with the original.
///
/// # Example
///
/// ```rust
/// use rewind::core::Stack;
///
/// let empty = Stack::new();
/// let one = empty.push(1);
/// let two = one.push(2);
///
/// assert_eq!(two.peek_top(), Some(&2));
/// assert_eq!(two.pop(), one);
/// assert!(!empty.can_pop()); // Original unchanged
/// ```
pub struct Stack<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Return a new stack with `item` on top.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::Stack;
    ///
    /// let stack = Stack::new().push("a").push("b");
    /// assert_eq!(stack.len(), 2);
    /// assert_eq!(stack.peek_top(), Some(&"b"));
    /// ```
    #[must_use]
    pub fn push(&self, item: T) -> Self {
        Self {
            head: Some(Arc::new(Node {
                item,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Return a new stack without the top element.
    ///
    /// Popping an empty stack yields another empty stack; it is not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::Stack;
    ///
    /// let empty: Stack<u8> = Stack::new();
    /// assert!(empty.pop().is_empty());
    ///
    /// let stack = Stack::new().push(1).push(2);
    /// assert_eq!(stack.pop().peek_top(), Some(&1));
    /// ```
    #[must_use]
    pub fn pop(&self) -> Self {
        match &self.head {
            Some(node) => Self {
                head: node.next.clone(),
                len: self.len - 1,
            },
            None => Self::new(),
        }
    }

    /// Top element, or `None` when the stack is empty.
    pub fn peek_top(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.item)
    }

    /// True iff at least one element is present.
    pub fn can_pop(&self) -> bool {
        self.head.is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate from the top of the stack down to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// True when both stacks share the same top node (or are both empty).
    ///
    /// This is identity, not equality: two stacks built separately from
    /// the same values compare equal with `==` but not with `ptr_eq`.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn bottom_up(&self) -> Vec<&T> {
        let mut items: Vec<&T> = self.iter().collect();
        items.reverse();
        items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

// Unlinks uniquely owned nodes one at a time so long histories don't
// recurse through every `Arc` on drop.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && (self.ptr_eq(other) || self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bottom_up()).finish()
    }
}

/// Builds a stack by pushing items in iteration order, so the last item
/// ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Stack::new(), |stack, item| stack.push(item))
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-down iterator over a [`Stack`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Serialized bottom to top, the order the items were pushed.
impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for item in self.bottom_up() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
