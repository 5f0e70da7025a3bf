use crate::core::inventory::Inventory;
use crate::core::{Item, Model};
use std::io::{self, Write};

/// Human-readable dump of an entity, two spaces per indentation level.
pub trait Printable {
    fn print_to<W: Write>(&self, out: &mut W, indentation: usize) -> io::Result<()>;

    fn print(&self, indentation: usize) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.print_to(&mut handle, indentation)
    }
}

fn indent(indentation: usize) -> String {
    " ".repeat(indentation * 2)
}

impl Printable for Model {
    fn print_to<W: Write>(&self, out: &mut W, indentation: usize) -> io::Result<()> {
        let indent = indent(indentation);
        writeln!(out, "{}Id:\t{}", indent, self.id)?;
        writeln!(out, "{}Maker:\t{}", indent, self.maker)?;
        writeln!(out, "{}Name:\t{}", indent, self.name)?;
        writeln!(out, "{}Type:\t{}", indent, self.r#type)
    }
}

impl Printable for Item {
    fn print_to<W: Write>(&self, out: &mut W, indentation: usize) -> io::Result<()> {
        let indent = indent(indentation);
        writeln!(out, "{}Model:\t{}", indent, self.model)?;
        writeln!(out, "{}Serial:\t{}", indent, self.serial)?;
        writeln!(out, "{}Date bought:\t{}", indent, self.date_bought)
    }
}

impl<T: Printable> Printable for [T] {
    fn print_to<W: Write>(&self, out: &mut W, indentation: usize) -> io::Result<()> {
        for (index, entity) in self.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            entity.print_to(out, indentation)?;
        }
        Ok(())
    }
}

impl Printable for Inventory {
    fn print_to<W: Write>(&self, out: &mut W, indentation: usize) -> io::Result<()> {
        let header = indent(indentation);
        writeln!(out, "{}Models:", header)?;
        self.models.print_to(out, indentation + 1)?;
        writeln!(out, "{}Items:", header)?;
        self.items.print_to(out, indentation + 1)
    }
}
