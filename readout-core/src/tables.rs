//! Per-chip-family register tables.
//!
//! Each family has a fixed, ordered list of registers whose address equals
//! its position. The table and its name lookup are built once per process,
//! validated on the way (duplicate names, address gaps, bad defaults), and
//! shared read-only afterwards.

mod croc;
mod rd53b;

use crate::register::{Register, RegisterError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Static description of one register, as listed in the chip manual.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegisterSpec {
    name: &'static str,
    address: u16,
    widths: &'static [u8],
    defaults: &'static [u16],
    read_only: bool,
}

pub(crate) const fn rw(
    name: &'static str,
    address: u16,
    widths: &'static [u8],
    defaults: &'static [u16],
) -> RegisterSpec {
    RegisterSpec {
        name,
        address,
        widths,
        defaults,
        read_only: false,
    }
}

pub(crate) const fn ro(
    name: &'static str,
    address: u16,
    widths: &'static [u8],
    defaults: &'static [u16],
) -> RegisterSpec {
    RegisterSpec {
        name,
        address,
        widths,
        defaults,
        read_only: true,
    }
}

/// Readout chip families with a known register map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipFamily {
    /// RD53B, ATLAS flavour
    Rd53b,
    /// CROC, CMS flavour of RD53B
    Croc,
}

impl ChipFamily {
    /// All known families.
    pub const ALL: [ChipFamily; 2] = [ChipFamily::Rd53b, ChipFamily::Croc];

    fn specs(self) -> &'static [RegisterSpec] {
        match self {
            ChipFamily::Rd53b => &rd53b::RD53B_REGISTERS,
            ChipFamily::Croc => &croc::CROC_REGISTERS,
        }
    }

    /// Returns the process-wide register table, building it on first use.
    pub fn table(self) -> Result<&'static RegisterTable, RegisterError> {
        static RD53B: OnceLock<Result<RegisterTable, RegisterError>> = OnceLock::new();
        static CROC: OnceLock<Result<RegisterTable, RegisterError>> = OnceLock::new();

        let cell = match self {
            ChipFamily::Rd53b => &RD53B,
            ChipFamily::Croc => &CROC,
        };
        cell.get_or_init(|| RegisterTable::from_specs(self, self.specs()))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Display for ChipFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChipFamily::Rd53b => f.write_str("rd53b"),
            ChipFamily::Croc => f.write_str("croc"),
        }
    }
}

impl FromStr for ChipFamily {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rd53b" | "atlas" => Ok(ChipFamily::Rd53b),
            "croc" | "cms" => Ok(ChipFamily::Croc),
            other => Err(RegisterError::UnknownFamily(other.to_string())),
        }
    }
}

/// Ordered register collection for one chip family.
#[derive(Debug)]
pub struct RegisterTable {
    family: ChipFamily,
    registers: Vec<Register>,
    index: HashMap<String, usize>,
}

impl RegisterTable {
    fn from_specs(family: ChipFamily, specs: &[RegisterSpec]) -> Result<Self, RegisterError> {
        let registers = specs
            .iter()
            .map(|s| Register::new(s.name, s.address, s.widths, s.defaults, s.read_only))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(family, registers)
    }

    /// Builds a table, failing on duplicate names or on an address that does
    /// not match the register's position.
    pub fn new(family: ChipFamily, registers: Vec<Register>) -> Result<Self, RegisterError> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(registers.len());

        for (i, reg) in registers.iter().enumerate() {
            if usize::from(reg.address()) != i {
                return Err(RegisterError::AddressMismatch {
                    name: reg.name().to_string(),
                    address: reg.address(),
                    index: i,
                });
            }
            if let Some(&first) = index.get(reg.name()) {
                return Err(RegisterError::DuplicateName {
                    name: reg.name().to_string(),
                    first: registers[first].address(),
                    second: reg.address(),
                });
            }
            index.insert(reg.name().to_string(), i);
        }

        Ok(Self {
            family,
            registers,
            index,
        })
    }

    /// Chip family this table describes.
    pub fn family(&self) -> ChipFamily {
        self.family
    }

    /// Registers in address order.
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Number of registers.
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Returns true if the table holds no registers.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Position of the register called `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, RegisterError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RegisterError::UnknownName(name.to_string()))
    }

    /// Register at `address`.
    pub fn by_address(&self, address: u16) -> Result<&Register, RegisterError> {
        self.registers
            .get(usize::from(address))
            .ok_or(RegisterError::UnknownAddress(address))
    }

    /// Register called `name`.
    pub fn by_name(&self, name: &str) -> Result<&Register, RegisterError> {
        Ok(&self.registers[self.index_of(name)?])
    }
}
