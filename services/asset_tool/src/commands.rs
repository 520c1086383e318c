//! Command implementations
//!
//! Commands never print; they build reports and leave rendering to `main`.

use anyhow::{bail, Context, Result};
use bcx_config::ToolConfig;
use bcx_types::{
    asset_id_to_str, coin_metadata, encode_asset_id, is_valid_asset_id, known_assets, AssetId,
    AssetIdHeader, ExpParameter, UnitExponent, EXPONENTIAL_SERIES, MAX_EXP_PARAMETER,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Result of `encode`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EncodeReport {
    pub symbol: String,
    pub id: u32,
    pub hex: String,
    pub header: String,
    pub valid: bool,
}

/// Result of `decode` and `validate`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DecodeReport {
    pub id: u32,
    pub hex: String,
    pub text: String,
    pub header: String,
    pub valid: bool,
    pub name: String,
    pub unit_exponent: u8,
}

/// Result of `param`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParamReport {
    pub quantity: i64,
    pub param: u8,
    pub floor: i64,
}

/// Result of `convert`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConvertReport {
    pub param: u8,
    pub from_exp: u8,
    pub to_exp: u8,
    pub result: u8,
    pub clamped: bool,
}

/// Result of `amount`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AmountReport {
    pub amount: String,
    pub unit_exponent: u8,
    pub param: u8,
    pub floor: String,
}

/// One row of `list`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssetRow {
    pub symbol: String,
    pub id: u32,
    pub name: String,
    pub unit_exponent: u8,
    pub custom: bool,
}

fn header_name(header: AssetIdHeader) -> &'static str {
    match header {
        AssetIdHeader::Raw => "raw",
        AssetIdHeader::Alpha => "alpha",
        AssetIdHeader::AlphaNum => "alphanum",
        AssetIdHeader::Reserved => "reserved",
    }
}

/// Parse an id argument: `0x`-prefixed hex or plain decimal
pub fn parse_asset_id_arg(arg: &str) -> Result<AssetId> {
    let value = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid hex asset id '{}'", arg))?,
        None => arg
            .parse::<u32>()
            .with_context(|| format!("Invalid decimal asset id '{}'", arg))?,
    };
    Ok(AssetId::from_u32(value))
}

pub fn encode(symbol: &str) -> EncodeReport {
    let id = encode_asset_id(symbol);
    debug!(symbol, id = id.to_u32(), "encoded asset symbol");
    EncodeReport {
        symbol: symbol.to_string(),
        id: id.to_u32(),
        hex: format!("0x{:08x}", id.to_u32()),
        header: header_name(id.header()).to_string(),
        valid: is_valid_asset_id(id),
    }
}

/// Decode an id, consulting configured custom assets after the built-in table
pub fn decode(id: AssetId, config: &ToolConfig) -> DecodeReport {
    let (name, unit_exponent) = match coin_metadata(id) {
        Some(meta) => (meta.name.to_string(), meta.unit_exponent),
        None => config
            .custom_asset(id)
            .map(|asset| (asset.name.clone(), asset.unit_exponent))
            .unwrap_or_default(),
    };

    DecodeReport {
        id: id.to_u32(),
        hex: format!("0x{:08x}", id.to_u32()),
        text: asset_id_to_str(id),
        header: header_name(id.header()).to_string(),
        valid: is_valid_asset_id(id),
        name,
        unit_exponent,
    }
}

pub fn param(quantity: i64) -> Result<ParamReport> {
    let param = ExpParameter::try_from_quantity(quantity)?;
    Ok(ParamReport {
        quantity,
        param: param.get(),
        floor: param.quantity(),
    })
}

pub fn convert(param: u8, from_exp: u8, to_exp: u8) -> Result<ConvertReport> {
    let typed = ExpParameter::try_from(param)?;
    UnitExponent::new(from_exp)?;
    UnitExponent::new(to_exp)?;

    let result = typed.convert(from_exp, to_exp).get();
    let unclamped = i32::from(param) + 9 * (i32::from(to_exp) - i32::from(from_exp));
    Ok(ConvertReport {
        param,
        from_exp,
        to_exp,
        result,
        clamped: param != 0 && unclamped != i32::from(result),
    })
}

pub fn amount(amount: Decimal, unit_exponent: u8) -> Result<AmountReport> {
    let exp = UnitExponent::new(unit_exponent)?;
    let param = ExpParameter::from_decimal(amount, exp)?;
    Ok(AmountReport {
        amount: amount.to_string(),
        unit_exponent,
        param: param.get(),
        floor: param.to_decimal(exp).to_string(),
    })
}

/// Built-in assets followed by configured custom assets
pub fn list(config: &ToolConfig) -> Result<Vec<AssetRow>> {
    let mut rows: Vec<AssetRow> = known_assets()
        .into_iter()
        .map(|(id, meta)| AssetRow {
            symbol: meta.symbol.to_string(),
            id: id.to_u32(),
            name: meta.name.to_string(),
            unit_exponent: meta.unit_exponent,
            custom: false,
        })
        .collect();

    for asset in &config.custom_assets {
        let id = asset.asset_id();
        if coin_metadata(id).is_some() {
            bail!("custom asset '{}' duplicates a built-in asset", asset.symbol);
        }
        rows.push(AssetRow {
            symbol: asset_id_to_str(id),
            id: id.to_u32(),
            name: asset.name.clone(),
            unit_exponent: asset.unit_exponent,
            custom: true,
        });
    }

    Ok(rows)
}

/// Full series as (index, value) pairs
pub fn series() -> Vec<(u8, i64)> {
    (0..=MAX_EXP_PARAMETER)
        .map(|i| (i, EXPONENTIAL_SERIES[usize::from(i)]))
        .collect()
}

impl fmt::Display for EncodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {}{})",
            self.symbol,
            self.hex,
            self.id,
            self.header,
            if self.valid { "" } else { ", invalid" }
        )
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.hex, self.text, self.header)?;
        if !self.valid {
            write!(f, " invalid")?;
        }
        if !self.name.is_empty() {
            write!(f, " {} [unit exponent {}]", self.name, self.unit_exponent)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> param {} (floor {})", self.quantity, self.param, self.floor)
    }
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "param {} @ 10^{} -> param {} @ 10^{}{}",
            self.param,
            self.from_exp,
            self.result,
            self.to_exp,
            if self.clamped { " (clamped)" } else { "" }
        )
    }
}

impl fmt::Display for AmountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ 10^{} -> param {} (floor {})",
            self.amount, self.unit_exponent, self.param, self.floor
        )
    }
}

impl fmt::Display for AssetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} 0x{:08x} {:<2} {}{}",
            self.symbol,
            self.id,
            self.unit_exponent,
            self.name,
            if self.custom { " (custom)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcx_config::CustomAsset;
    use bcx_types::exponential_parameter;
    use rust_decimal_macros::dec;

    #[test]
    fn test_encode_report() {
        let report = encode("BTC");
        assert_eq!(report.id, 0x4000_0a83);
        assert_eq!(report.hex, "0x40000a83");
        assert_eq!(report.header, "alpha");
        assert!(report.valid);

        let bad = encode("btc");
        assert_eq!(bad.hex, "0xffffffff");
        assert!(!bad.valid);
    }

    #[test]
    fn test_parse_id_arg() {
        assert_eq!(parse_asset_id_arg("0x40000a83").unwrap().to_u32(), 0x4000_0a83);
        assert_eq!(parse_asset_id_arg("123").unwrap().to_u32(), 123);
        assert!(parse_asset_id_arg("0xzz").is_err());
        assert!(parse_asset_id_arg("BTC").is_err());
    }

    #[test]
    fn test_decode_uses_builtin_then_custom() {
        let mut config = ToolConfig::default();
        config.custom_assets.push(CustomAsset {
            symbol: "USNBT".to_string(),
            name: "US NuBits".to_string(),
            unit_exponent: 4,
        });

        let btc = decode(encode_asset_id("BTC"), &config);
        assert_eq!(btc.text, "BTC");
        assert_eq!(btc.name, "Bitcoin");

        let usnbt = decode(encode_asset_id("USNBT"), &config);
        assert_eq!(usnbt.name, "US NuBits");
        assert_eq!(usnbt.unit_exponent, 4);

        let spoofed = decode(AssetId::from_u32(0x8000_2503), &config);
        assert_eq!(spoofed.text, "BTC");
        assert!(!spoofed.valid);
        assert_eq!(spoofed.name, "");
    }

    #[test]
    fn test_param_and_convert() {
        let report = param(99).unwrap();
        assert_eq!(report.param, 18);
        assert_eq!(report.floor, 90);
        assert!(param(-1).is_err());

        let up = convert(169, 4, 8).unwrap();
        assert_eq!(up.result, 171);
        assert!(up.clamped);

        let down = convert(169, 8, 4).unwrap();
        assert_eq!(down.result, 133);
        assert!(!down.clamped);

        assert!(convert(172, 0, 0).is_err());
        assert!(convert(10, 19, 0).is_err());
    }

    #[test]
    fn test_amount() {
        let report = amount(dec!(0.00015), 8).unwrap();
        assert_eq!(report.param, 37);
        assert_eq!(report.floor, "0.0001");
        assert!(amount(dec!(1), 19).is_err());
    }

    #[test]
    fn test_list_rejects_duplicate_custom() {
        let mut config = ToolConfig::default();
        assert!(list(&config).unwrap().iter().all(|row| !row.custom));

        config.custom_assets.push(CustomAsset {
            symbol: "BTC".to_string(),
            name: "Other Bitcoin".to_string(),
            unit_exponent: 8,
        });
        assert!(list(&config).is_err());
    }

    #[test]
    fn test_series_listing() {
        let series = series();
        assert_eq!(series.len(), 172);
        assert!(series
            .iter()
            .all(|&(index, value)| exponential_parameter(value) == index));
    }
}
