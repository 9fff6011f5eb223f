// src/export.rs
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::feed::Product;
use crate::i18n::Strings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn byte(self) -> u8 {
        match self {
            Delim::Csv => b',',
            Delim::Tsv => b'\t',
        }
    }
}

/// Header (optional) + one record per product. Fields holding the separator,
/// quotes or newlines are quoted.
fn write_all<W: Write>(
    w: W,
    products: &[Product],
    headers: Option<&[String]>,
    delim: Delim,
) -> csv::Result<W> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim.byte())
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    if let Some(h) = headers {
        wtr.write_record(h)?;
    }
    for p in products {
        wtr.write_record(&product_row(p))?;
    }
    wtr.flush()?;
    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// "40 (1); 42 (2)"
pub fn sizes_label(product: &Product) -> String {
    product
        .sizes
        .iter()
        .map(|e| format!("{} ({})", e.size, e.quantity))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn product_row(product: &Product) -> Vec<String> {
    vec![
        product.name.clone(),
        product.sku.clone(),
        product.price.clone(),
        sizes_label(product),
    ]
}

pub fn headers(strings: &Strings) -> Vec<String> {
    vec![
        s!(strings.col_name),
        s!(strings.col_sku),
        s!(strings.col_price),
        s!(strings.col_sizes),
    ]
}

/// Full export text for Copy and `--format csv|tsv`.
pub fn products_to_string(
    products: &[Product],
    headers: Option<&[String]>,
    delim: Delim,
) -> io::Result<String> {
    let buf = write_all(Vec::new(), products, headers, delim)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Stream rows to `path`, creating parent directories.
pub fn write_products(
    path: &Path,
    products: &[Product],
    headers: Option<&[String]>,
    delim: Delim,
) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_all(BufWriter::new(File::create(path)?), products, headers, delim)?;
    logf!("Export: wrote {} row(s) → {}", products.len(), path.display());
    Ok(())
}
