//! JSON export for resolved mappings.
//!
//! Persists a [`FormFields`] mapping as one flat JSON object of field label →
//! value array, the shape downstream storage consumes. Entry order and
//! per-key value order come straight from the mapping; repeated labels cannot
//! appear because values accumulate under one entry during resolution.

use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::error::FormResult;
use crate::fields::FormFields;

/// Write a mapping as compact JSON.
pub async fn write_fields<W>(fields: &FormFields, writer: W) -> FormResult<()>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_vec(fields)?;
    write_all(writer, &json).await
}

/// Write a mapping as pretty-printed JSON.
pub async fn write_fields_pretty<W>(fields: &FormFields, writer: W) -> FormResult<()>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_vec_pretty(fields)?;
    write_all(writer, &json).await
}

/// Render a mapping to a compact JSON string.
pub fn to_json_string(fields: &FormFields) -> FormResult<String> {
    Ok(serde_json::to_string(fields)?)
}

async fn write_all<W>(writer: W, json: &[u8]) -> FormResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(writer);
    writer.write_all(json).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
