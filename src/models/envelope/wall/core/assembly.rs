use std::collections::{BTreeMap, HashMap};

use uom::{
    ConstZero,
    si::f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity},
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::VolumetricHeatCapacity,
};

use super::AssemblyError;

/// Thermal properties of a homogeneous material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    pub heat_capacity: Constrained<VolumetricHeatCapacity, StrictlyPositive>,
}

impl Material {
    /// Creates a material from its conductivity and volumetric heat capacity.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::InvalidLayer`] if either property is not
    /// strictly positive.
    pub fn new(
        conductivity: ThermalConductivity,
        heat_capacity: VolumetricHeatCapacity,
    ) -> Result<Self, AssemblyError> {
        Ok(Self {
            conductivity: StrictlyPositive::new(conductivity).map_err(|source| {
                AssemblyError::InvalidLayer {
                    property: "conductivity",
                    source,
                }
            })?,
            heat_capacity: StrictlyPositive::new(heat_capacity).map_err(|source| {
                AssemblyError::InvalidLayer {
                    property: "heat_capacity",
                    source,
                }
            })?,
        })
    }

    /// Creates a material from conductivity, density and specific heat, as
    /// material property tables usually list them.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::InvalidLayer`] if the conductivity or the
    /// product `ρ·c` is not strictly positive.
    pub fn from_density_and_specific_heat(
        conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Self, AssemblyError> {
        Self::new(conductivity, density * specific_heat)
    }
}

/// One homogeneous layer of a construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub material: Material,
    pub thickness: Constrained<Length, StrictlyPositive>,
}

impl Layer {
    /// Creates a layer.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::InvalidLayer`] if `thickness` is not strictly
    /// positive.
    pub fn new(
        name: impl Into<String>,
        material: Material,
        thickness: Length,
    ) -> Result<Self, AssemblyError> {
        Ok(Self {
            name: name.into(),
            material,
            thickness: StrictlyPositive::new(thickness).map_err(|source| {
                AssemblyError::InvalidLayer {
                    property: "thickness",
                    source,
                }
            })?,
        })
    }
}

/// Ordered layers of an opaque wall, outside face first.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    layers: Vec<Layer>,
}

impl Construction {
    /// Creates a construction from layers ordered outside to inside.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::Empty`] if `layers` is empty.
    pub fn new(layers: Vec<Layer>) -> Result<Self, AssemblyError> {
        if layers.is_empty() {
            return Err(AssemblyError::Empty);
        }
        Ok(Self { layers })
    }

    /// Builds a construction from `(thickness, material name)` pairs looked up
    /// in `catalog`.
    ///
    /// Each layer is named after its material.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::UnknownMaterial`] for a name the catalog
    /// doesn't have, [`AssemblyError::InvalidLayer`] for a non-positive
    /// thickness, and [`AssemblyError::Empty`] if no pairs are given.
    pub fn from_catalog<C, S>(
        catalog: &C,
        layers: impl IntoIterator<Item = (Length, S)>,
    ) -> Result<Self, AssemblyError>
    where
        C: MaterialCatalog + ?Sized,
        S: AsRef<str>,
    {
        let layers = layers
            .into_iter()
            .map(|(thickness, name)| {
                let name = name.as_ref();
                let material =
                    catalog
                        .material(name)
                        .ok_or_else(|| AssemblyError::UnknownMaterial {
                            name: name.to_owned(),
                        })?;
                Layer::new(name, material, thickness)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(layers)
    }

    /// Layers ordered outside to inside.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Sum of all layer thicknesses.
    #[must_use]
    pub fn total_thickness(&self) -> Length {
        self.layers
            .iter()
            .fold(Length::ZERO, |total, layer| total + layer.thickness.get())
    }
}

/// Lookup of materials by name.
pub trait MaterialCatalog {
    /// Returns the named material, if known.
    fn material(&self, name: &str) -> Option<Material>;
}

impl MaterialCatalog for HashMap<String, Material> {
    fn material(&self, name: &str) -> Option<Material> {
        self.get(name).copied()
    }
}

impl MaterialCatalog for BTreeMap<String, Material> {
    fn material(&self, name: &str) -> Option<Material> {
        self.get(name).copied()
    }
}
