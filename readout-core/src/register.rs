//! Bit-packed chip configuration registers.
//!
//! A register is an ordered list of sub-fields. Fields are declared
//! most-significant first (the way the chip manual lists them) but packed
//! least-significant first, so the declaration order is reversed once at
//! construction and the last declared field ends up in the lowest bits.

use crate::tables::RegisterTable;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Maximum number of bits a register can hold.
pub const MAX_REGISTER_BITS: u32 = 16;

/// Errors raised while building, looking up or writing registers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("register {name}: {widths} field widths but {defaults} default values")]
    FieldCountMismatch {
        name: String,
        widths: usize,
        defaults: usize,
    },

    #[error("register {name}: default {value} does not fit in {width} bits (field {field})")]
    DefaultOutOfRange {
        name: String,
        field: usize,
        width: u8,
        value: u16,
    },

    #[error("register {name}: fields span {bits} bits, limit is 16")]
    RegisterTooWide { name: String, bits: u32 },

    #[error("register {name}: field {field} has zero width")]
    EmptyField { name: String, field: usize },

    #[error("duplicate register name {name} at addresses {first} and {second}")]
    DuplicateName {
        name: String,
        first: u16,
        second: u16,
    },

    #[error("register {name} declares address {address} but sits at index {index}")]
    AddressMismatch {
        name: String,
        address: u16,
        index: usize,
    },

    #[error("unknown register name: {0}")]
    UnknownName(String),

    #[error("unknown register address: {0}")]
    UnknownAddress(u16),

    #[error("unknown chip family: {0}")]
    UnknownFamily(String),

    #[error("register {0} is read-only")]
    PermissionDenied(String),

    #[error("value {value:#x} does not fit in register {name} ({bits} bits)")]
    ValueOutOfRange { name: String, value: u16, bits: u32 },
}

/// One sub-field of a register, in storage (LSB-first) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Width in bits
    pub width: u8,
    /// Default value, already checked to fit `width`
    pub default: u16,
    /// Bit offset of the field inside the packed word
    pub offset: u8,
}

impl Field {
    #[inline]
    fn mask(&self) -> u16 {
        field_mask(self.width)
    }
}

#[inline]
fn field_mask(width: u8) -> u16 {
    if u32::from(width) >= MAX_REGISTER_BITS {
        u16::MAX
    } else {
        (1u16 << width) - 1
    }
}

/// A chip configuration register.
///
/// Two registers compare equal when their addresses match, whatever their
/// names or layouts.
#[derive(Debug, Clone)]
pub struct Register {
    name: String,
    address: u16,
    /// Fields in storage order: index 0 holds the least significant bits.
    fields: Vec<Field>,
    size: u32,
    default_value: u16,
    read_only: bool,
}

impl Register {
    /// Builds a register from fields declared most-significant first.
    ///
    /// Out-of-range defaults are rejected rather than masked into range.
    pub fn new(
        name: impl Into<String>,
        address: u16,
        widths: &[u8],
        defaults: &[u16],
        read_only: bool,
    ) -> Result<Self, RegisterError> {
        let name = name.into();

        if widths.len() != defaults.len() {
            return Err(RegisterError::FieldCountMismatch {
                name,
                widths: widths.len(),
                defaults: defaults.len(),
            });
        }

        let size: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        if size > MAX_REGISTER_BITS {
            return Err(RegisterError::RegisterTooWide { name, bits: size });
        }

        for (i, (&width, &value)) in widths.iter().zip(defaults).enumerate() {
            if width == 0 {
                return Err(RegisterError::EmptyField { name, field: i });
            }
            if value & !field_mask(width) != 0 {
                return Err(RegisterError::DefaultOutOfRange {
                    name,
                    field: i,
                    width,
                    value,
                });
            }
        }

        // Declaration order is MSB-first; storage order is LSB-first.
        let mut fields = Vec::with_capacity(widths.len());
        let mut offset = 0u8;
        for (&width, &default) in widths.iter().rev().zip(defaults.iter().rev()) {
            fields.push(Field {
                width,
                default,
                offset,
            });
            offset += width;
        }

        let default_value = fields
            .iter()
            .fold(0u16, |acc, f| acc | ((f.default & f.mask()) << f.offset));

        Ok(Self {
            name,
            address,
            fields,
            size,
            default_value,
            read_only,
        })
    }

    /// Register name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register address (its index in the chip family table).
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Total number of bits used by the fields.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Packed default word.
    pub fn default_value(&self) -> u16 {
        self.default_value
    }

    /// Status and counter registers must never be written.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Fields in storage order (least significant first).
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Splits a packed word into field values in declaration order.
    pub fn unpack(&self, word: u16) -> Vec<u16> {
        self.fields
            .iter()
            .rev()
            .map(|f| (word >> f.offset) & f.mask())
            .collect()
    }

    /// Packs field values given in declaration order.
    pub fn pack(&self, values: &[u16]) -> Result<u16, RegisterError> {
        if values.len() != self.fields.len() {
            return Err(RegisterError::FieldCountMismatch {
                name: self.name.clone(),
                widths: self.fields.len(),
                defaults: values.len(),
            });
        }

        let mut word = 0u16;
        for (field, &value) in self.fields.iter().rev().zip(values) {
            if value & !field.mask() != 0 {
                return Err(RegisterError::ValueOutOfRange {
                    name: self.name.clone(),
                    value,
                    bits: u32::from(field.width),
                });
            }
            word |= value << field.offset;
        }
        Ok(word)
    }

    /// Checks that `value` can be written to this register.
    pub fn check_write(&self, value: u16) -> Result<(), RegisterError> {
        if self.read_only {
            return Err(RegisterError::PermissionDenied(self.name.clone()));
        }
        if self.size < MAX_REGISTER_BITS && u32::from(value) >> self.size != 0 {
            return Err(RegisterError::ValueOutOfRange {
                name: self.name.clone(),
                value,
                bits: self.size,
            });
        }
        Ok(())
    }
}

impl PartialEq for Register {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Register {}

impl Hash for Register {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

/// Current register values of one chip, seeded from the table defaults.
///
/// This is the write path of the configuration surface: writes to read-only
/// registers are refused before anything is recorded, so nothing reaches the
/// hardware layer that later flushes [`RegisterFile::pending`].
#[derive(Debug, Clone)]
pub struct RegisterFile {
    table: &'static RegisterTable,
    values: Vec<u16>,
    dirty: Vec<bool>,
}

impl RegisterFile {
    /// Creates a register file holding every register's default value.
    pub fn new(table: &'static RegisterTable) -> Self {
        let values = table.registers().iter().map(Register::default_value).collect();
        Self {
            table,
            values,
            dirty: vec![false; table.len()],
        }
    }

    /// Table backing this register file.
    pub fn table(&self) -> &'static RegisterTable {
        self.table
    }

    /// Reads the current value of a register.
    pub fn read(&self, name: &str) -> Result<u16, RegisterError> {
        let index = self.table.index_of(name)?;
        Ok(self.values[index])
    }

    /// Stores a new value, refusing read-only registers and oversized values.
    pub fn write(&mut self, name: &str, value: u16) -> Result<(), RegisterError> {
        let index = self.table.index_of(name)?;
        self.table.registers()[index].check_write(value)?;
        if self.values[index] != value {
            self.values[index] = value;
            self.dirty[index] = true;
        }
        Ok(())
    }

    /// Writes individual field values given in declaration order.
    pub fn write_fields(&mut self, name: &str, values: &[u16]) -> Result<(), RegisterError> {
        let word = self.table.by_name(name)?.pack(values)?;
        self.write(name, word)
    }

    /// Registers changed since creation or the last [`clear_pending`](Self::clear_pending),
    /// as `(address, value)` pairs in address order.
    pub fn pending(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.dirty
            .iter()
            .zip(self.table.registers())
            .zip(&self.values)
            .filter(|((&dirty, _), _)| dirty)
            .map(|((_, reg), &value)| (reg.address(), value))
    }

    /// Marks all pending writes as flushed.
    pub fn clear_pending(&mut self) {
        self.dirty.iter_mut().for_each(|d| *d = false);
    }

    /// Restores every register to its default value.
    pub fn reset(&mut self) {
        for (i, reg) in self.table.registers().iter().enumerate() {
            self.values[i] = reg.default_value();
            self.dirty[i] = false;
        }
    }
}
