use std::io::Write;

use crate::error::Result;
use crate::models::Ingredient;

/// Write the shopping list as CSV with a `name,quantity,unit` header.
pub fn write_shopping_csv<W: Write>(list: &[Ingredient], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["name", "quantity", "unit"])?;
    for item in list {
        wtr.write_record([
            item.name().to_string(),
            item.quantity().to_string(),
            item.unit().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the shopping list as a pretty-printed JSON array.
pub fn write_shopping_json<W: Write>(list: &[Ingredient], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, list)?;
    writeln!(writer)?;
    Ok(())
}
