//! Raw xlsx part inspection for formatting that readers don't expose.

use std::io::{Cursor, Read};

pub const SHEET1: &str = "xl/worksheets/sheet1.xml";
pub const SHEET2: &str = "xl/worksheets/sheet2.xml";
pub const STYLES: &str = "xl/styles.xml";

/// Read one XML part out of an xlsx archive
pub fn read_part(xlsx: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(xlsx)).expect("xlsx is a zip archive");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("missing part {name}: {e}"));
    let mut xml = String::new();
    file.read_to_string(&mut xml).expect("utf-8 xml");
    xml
}

/// Value of `name="..."` inside a single tag
fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = tag.find(&key)? + key.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

/// Contents between `<tag ...>` and `</tag>`
fn section<'a>(xml: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}");
    let start = xml
        .find(&format!("{open} "))
        .or_else(|| xml.find(&format!("{open}>")))
        .unwrap_or_else(|| panic!("no <{tag}> in xml"));
    let body = start + xml[start..].find('>').unwrap_or(0) + 1;
    let end = xml[body..]
        .find(&format!("</{tag}>"))
        .unwrap_or_else(|| panic!("unterminated <{tag}>"));
    &xml[body..body + end]
}

/// Style index of a written cell: `None` if the cell is absent, `Some(0)` if
/// it carries no style.
pub fn cell_style(sheet: &str, cell: &str) -> Option<usize> {
    let start = sheet.find(&format!("<c r=\"{cell}\""))?;
    let tag_end = sheet[start..].find('>')?;
    let tag = &sheet[start..start + tag_end];
    Some(attr(tag, "s").map_or(0, |s| s.parse().expect("numeric style index")))
}

/// The `<xf>` record for a cell style index
pub fn cell_xf(styles: &str, index: usize) -> &str {
    section(styles, "cellXfs")
        .split("<xf ")
        .skip(1)
        .nth(index)
        .unwrap_or_else(|| panic!("no xf {index}"))
}

fn xf_id(styles: &str, index: usize, name: &str) -> usize {
    let xf = cell_xf(styles, index);
    // The split dropped "<xf", so restore the separating space
    let open_tag = format!(" {}", &xf[..xf.find('>').unwrap_or(xf.len())]);
    attr(&open_tag, name)
        .unwrap_or_else(|| panic!("xf {index} lacks {name}"))
        .parse()
        .expect("numeric id")
}

/// The `<border>` record referenced by a cell style
pub fn border_of(styles: &str, index: usize) -> &str {
    let id = xf_id(styles, index, "borderId");
    section(styles, "borders")
        .split("</border>")
        .nth(id)
        .unwrap_or_else(|| panic!("no border {id}"))
}

/// The `<fill>` record referenced by a cell style
pub fn fill_of(styles: &str, index: usize) -> &str {
    let id = xf_id(styles, index, "fillId");
    section(styles, "fills")
        .split("</fill>")
        .nth(id)
        .unwrap_or_else(|| panic!("no fill {id}"))
}
