// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sparse two-dimensional grid of values.

use std::{
    any::Any,
    collections::BTreeMap,
    hash::{Hash, Hasher},
    sync::Arc
};

use crate::{
    error::BeanError,
    property_type::PropertyType,
    types::{ResolvedType, TypeInfo, builtin},
    value::Value
};

/// Fixed-size grid with optional cells, addressed by `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid<V> {
    rows:    usize,
    columns: usize,
    cells:   BTreeMap<(usize, usize), V>
}

impl<V> Grid<V> {
    /// Empty grid.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: BTreeMap::new()
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell content.
    pub fn get(&self, row: usize, column: usize) -> Option<&V> {
        self.cells.get(&(row, column))
    }

    /// Fill a cell, returning the previous content.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::Validation`] for coordinates outside the grid.
    pub fn put(&mut self, row: usize, column: usize, value: V) -> Result<Option<V>, BeanError> {
        if row >= self.rows || column >= self.columns {
            return Err(BeanError::validation(
                "grid",
                format!(
                    "cell ({row}, {column}) outside {}x{}",
                    self.rows, self.columns
                )
            ));
        }
        Ok(self.cells.insert((row, column), value))
    }

    /// Empty a cell.
    pub fn remove(&mut self, row: usize, column: usize) -> Option<V> {
        self.cells.remove(&(row, column))
    }

    /// Filled cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &V)> {
        self.cells
            .iter()
            .map(|(&(row, column), value)| (row, column, value))
    }

    /// Grid of the same shape with every cell converted.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&V) -> Result<U, E>) -> Result<Grid<U>, E> {
        let mut cells = BTreeMap::new();
        for (key, value) in &self.cells {
            cells.insert(*key, f(value)?);
        }
        Ok(Grid {
            rows: self.rows,
            columns: self.columns,
            cells
        })
    }
}

/// View an opaque value as a grid of values.
pub(crate) fn as_value_grid(value: &Arc<dyn Any + Send + Sync>) -> Option<&Grid<Value>> {
    value.downcast_ref::<Grid<Value>>()
}

impl<V: PropertyType> PropertyType for Grid<V> {
    fn type_info() -> Arc<TypeInfo> {
        builtin("Grid")
    }

    fn resolved_type() -> ResolvedType {
        ResolvedType::parameterized(Self::type_info(), vec![V::resolved_type()])
    }

    fn to_value(&self) -> Value {
        let converted: Result<Grid<Value>, BeanError> = self.try_map(|cell| Ok(cell.to_value()));
        match converted {
            Ok(grid) => Value::opaque(grid),
            Err(_) => Value::Null
        }
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match &value {
            Value::Opaque(shared) => match as_value_grid(shared) {
                Some(grid) => grid.try_map(|cell| V::from_value(cell.clone())),
                None => Err(BeanError::type_mismatch("Grid", "opaque value"))
            },
            other => Err(BeanError::type_mismatch("Grid", other.kind_name()))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.cells.len() == other.cells.len()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|((ka, va), (kb, vb))| ka == kb && va.equal(vb))
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.columns.hash(state);
        for (key, value) in &self.cells {
            key.hash(state);
            value.hash_code(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_checks_bounds() {
        let mut grid = Grid::new(1, 2);
        assert_eq!(grid.put(0, 1, "a"), Ok(None));
        assert_eq!(grid.put(0, 1, "b"), Ok(Some("a")));
        assert!(grid.put(1, 0, "c").is_err());
        assert_eq!(grid.get(0, 1), Some(&"b"));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn cells_in_row_major_order() {
        let mut grid = Grid::new(2, 2);
        grid.put(1, 0, 3).unwrap();
        grid.put(0, 1, 2).unwrap();
        let cells: Vec<_> = grid.cells().map(|(r, c, v)| (r, c, *v)).collect();
        assert_eq!(cells, vec![(0, 1, 2), (1, 0, 3)]);
    }

    #[test]
    fn converts_through_value() {
        let mut grid: Grid<String> = Grid::new(3, 3);
        grid.put(2, 2, "x".to_owned()).unwrap();
        let value = grid.to_value();
        assert_eq!(Grid::<String>::from_value(value.clone()), Ok(grid.clone()));
        assert_eq!(value, grid.to_value());
        assert_eq!(Grid::<String>::resolved_type().to_string(), "Grid<String>");
    }
}
