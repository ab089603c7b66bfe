//! Qualifier, qualifier declaration and qualifier list codec. No markers.

use model::{Flavor, Qualifier, QualifierDecl, QualifierList, Scope};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::CodecResult;

impl CimEncoder {
    pub fn put_qualifier(&mut self, qualifier: &Qualifier) -> CodecResult<()> {
        self.put_name(&qualifier.name)?;
        self.put_value(&qualifier.value)?;
        self.put_u32(qualifier.flavor.raw())?;
        self.put_bool(qualifier.propagated)
    }

    pub fn put_qualifier_list(&mut self, list: &QualifierList) -> CodecResult<()> {
        self.put_count(list.len())?;
        for qualifier in list {
            self.put_qualifier(qualifier)?;
        }
        Ok(())
    }

    pub fn put_qualifier_decl(&mut self, decl: &QualifierDecl) -> CodecResult<()> {
        self.put_name(&decl.name)?;
        self.put_value(&decl.value)?;
        self.put_u32(decl.scope.raw())?;
        self.put_u32(decl.flavor.raw())?;
        self.put_u32(decl.array_size)
    }

    pub fn put_qualifier_decls(&mut self, decls: &[QualifierDecl]) -> CodecResult<()> {
        self.put_seq(decls, Self::put_qualifier_decl)
    }
}

impl CimDecoder<'_> {
    pub fn get_qualifier(&mut self) -> CodecResult<Qualifier> {
        Ok(Qualifier {
            name: self.get_name()?,
            value: self.get_value()?,
            flavor: Flavor::from_raw(self.get_u32()?),
            propagated: self.get_bool()?,
        })
    }

    /// Decodes a qualifier list. Duplicate names are not rejected.
    pub fn get_qualifier_list(&mut self) -> CodecResult<QualifierList> {
        Ok(QualifierList::from(self.get_seq(Self::get_qualifier)?))
    }

    pub fn get_qualifier_decl(&mut self) -> CodecResult<QualifierDecl> {
        Ok(QualifierDecl {
            name: self.get_name()?,
            value: self.get_value()?,
            scope: Scope::from_raw(self.get_u32()?),
            flavor: Flavor::from_raw(self.get_u32()?),
            array_size: self.get_u32()?,
        })
    }

    pub fn get_qualifier_decls(&mut self) -> CodecResult<Vec<QualifierDecl>> {
        self.get_seq(Self::get_qualifier_decl)
    }
}
