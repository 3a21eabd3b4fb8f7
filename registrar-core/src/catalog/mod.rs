//! Course catalog - a height-balanced binary search tree keyed by course code
//!
//! Each node owns its course and both child subtrees. After every insert the
//! heights along the insertion path are recomputed and rotations restore
//! |height(left) - height(right)| <= 1 at every node.

pub mod iter;

use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace};

use crate::model::Course;
pub use iter::Iter;

type Link = Option<Box<Node>>;

struct Node {
    course: Course,
    height: usize,
    left: Link,
    right: Link,
}

impl Node {
    fn new(course: Course) -> Self {
        Self {
            course,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Broken structural property found by [`Catalog::check_invariants`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Course {child} is on the wrong side of {parent}")]
    Unordered { parent: String, child: String },

    #[error("Node {code} has balance factor {factor}")]
    Unbalanced { code: String, factor: isize },

    #[error("Node {code} caches height {cached} but has height {actual}")]
    StaleHeight {
        code: String,
        cached: usize,
        actual: usize,
    },
}

/// Ordered store of all courses
#[derive(Default)]
pub struct Catalog {
    root: Link,
    len: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course by code order
    ///
    /// Returns `false` and discards `course` when the code is already
    /// present; the stored course and the tree shape are left untouched.
    pub fn insert(&mut self, course: Course) -> bool {
        let key = course.code().to_string();
        let (root, inserted) = insert_node(self.root.take(), course, &key);
        self.root = Some(root);

        if inserted {
            self.len += 1;
            debug!(course_code = %key, height = self.height(), "Inserted course into catalog");
        } else {
            debug!(course_code = %key, "Course already in catalog, insert ignored");
        }
        inserted
    }

    /// Look up a course by exact code
    pub fn search(&self, code: &str) -> Option<&Course> {
        let mut current = &self.root;
        while let Some(node) = current {
            match code.cmp(node.course.code()) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&node.course),
            }
        }
        None
    }

    pub(crate) fn search_mut(&mut self, code: &str) -> Option<&mut Course> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match code.cmp(node.course.code()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.course),
            }
        }
        None
    }

    pub fn contains(&self, code: &str) -> bool {
        self.search(code).is_some()
    }

    /// Courses in ascending code order
    ///
    /// The iterator borrows the tree and can be created any number of times.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; an empty catalog has height 0
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Verify ordering, balance and cached heights for every node
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_node(&self.root, None, None).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Course> for Catalog {
    fn extend<I: IntoIterator<Item = Course>>(&mut self, iter: I) {
        for course in iter {
            self.insert(course);
        }
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|course| course.code()))
            .finish()
    }
}

fn insert_node(link: Link, course: Course, key: &str) -> (Box<Node>, bool) {
    let mut node = match link {
        Some(node) => node,
        None => return (Box::new(Node::new(course)), true),
    };

    let inserted = match key.cmp(node.course.code()) {
        Ordering::Less => {
            let (child, inserted) = insert_node(node.left.take(), course, key);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_node(node.right.take(), course, key);
            node.right = Some(child);
            inserted
        }
        Ordering::Equal => false,
    };

    if !inserted {
        return (node, false);
    }

    node.update_height();
    (rebalance(node, key), true)
}

/// Restore balance at `node` after `key` was inserted below it
fn rebalance(mut node: Box<Node>, key: &str) -> Box<Node> {
    let factor = node.balance_factor();

    if factor > 1 {
        let left_left = node.left.as_ref().is_some_and(|left| key < left.course.code());
        if left_left {
            trace!(at = node.course.code(), "Left-left case: rotating right");
            return rotate_right(node);
        }
        trace!(at = node.course.code(), "Left-right case: double rotation");
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if factor < -1 {
        let right_right = node.right.as_ref().is_some_and(|right| key > right.course.code());
        if right_right {
            trace!(at = node.course.code(), "Right-right case: rotating left");
            return rotate_left(node);
        }
        trace!(at = node.course.code(), "Right-left case: double rotation");
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}

fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let mut x = match y.left.take() {
        Some(x) => x,
        None => return y,
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let mut y = match x.right.take() {
        Some(y) => y,
        None => return x,
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Returns the recomputed height of the subtree
fn check_node(
    link: &Link,
    lower: Option<&str>,
    upper: Option<&str>,
) -> Result<usize, InvariantViolation> {
    let node = match link {
        Some(node) => node,
        None => return Ok(0),
    };
    let code = node.course.code();

    if let Some(lower) = lower {
        if code <= lower {
            return Err(InvariantViolation::Unordered {
                parent: lower.to_string(),
                child: code.to_string(),
            });
        }
    }
    if let Some(upper) = upper {
        if code >= upper {
            return Err(InvariantViolation::Unordered {
                parent: upper.to_string(),
                child: code.to_string(),
            });
        }
    }

    let left = check_node(&node.left, lower, Some(code))?;
    let right = check_node(&node.right, Some(code), upper)?;

    let factor = left as isize - right as isize;
    if factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            code: code.to_string(),
            factor,
        });
    }

    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            code: code.to_string(),
            cached: node.height,
            actual,
        });
    }
    Ok(actual)
}
