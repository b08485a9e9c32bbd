use super::monomer::{Monomer, Resolution};
use std::ops::Index;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Monomer '{name}' with {resolution} resolution is already in the catalog")]
    Duplicate { name: String, resolution: Resolution },

    #[error("Monomer '{name}' with {resolution} resolution is not in the catalog")]
    NotFound { name: String, resolution: Resolution },
}

/// An ordered collection of monomer templates.
///
/// Lookup identity is `(name, resolution)`; atoms and link endpoints take no
/// part in it. The catalog is loaded once at startup and treated as immutable
/// by the assembly engine — [`MonomerCatalog::add`] and
/// [`MonomerCatalog::remove`] exist for catalog management, not for use
/// during generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonomerCatalog {
    monomers: Vec<Monomer>,
}

impl MonomerCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a pre-built template list, keeping its order.
    pub fn from_monomers(monomers: Vec<Monomer>) -> Self {
        Self { monomers }
    }

    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    /// Retrieves a template by positional index.
    pub fn get(&self, index: usize) -> Option<&Monomer> {
        self.monomers.get(index)
    }

    /// Returns an iterator over the templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Monomer> {
        self.monomers.iter()
    }

    /// Finds the positional index of the first template matching
    /// `(name, resolution)`.
    ///
    /// # Return
    ///
    /// Returns `Some(index)` when a matching template exists, otherwise
    /// `None`.
    pub fn index_of(&self, name: &str, resolution: Resolution) -> Option<usize> {
        self.monomers
            .iter()
            .position(|monomer| monomer.matches(name, resolution))
    }

    /// Appends a template, rejecting duplicates by `(name, resolution)`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Duplicate`] when a template with the same
    /// identity is already present.
    pub fn add(&mut self, monomer: Monomer) -> Result<(), CatalogError> {
        if self.index_of(&monomer.name, monomer.resolution).is_some() {
            return Err(CatalogError::Duplicate {
                name: monomer.name,
                resolution: monomer.resolution,
            });
        }
        self.monomers.push(monomer);
        Ok(())
    }

    /// Removes and returns the template matching `(name, resolution)`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no such template exists.
    pub fn remove(&mut self, name: &str, resolution: Resolution) -> Result<Monomer, CatalogError> {
        match self.index_of(name, resolution) {
            Some(index) => Ok(self.monomers.remove(index)),
            None => Err(CatalogError::NotFound {
                name: name.to_string(),
                resolution,
            }),
        }
    }
}

impl Index<usize> for MonomerCatalog {
    type Output = Monomer;

    fn index(&self, index: usize) -> &Monomer {
        &self.monomers[index]
    }
}
