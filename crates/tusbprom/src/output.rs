use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tracing::{info, warn};
use tusbprom_header::{ValidationReport, HEADER_SIZE, SIGNATURE};

pub const REPORT_SCHEMA_ID: &str = "tusbprom/cli/v1/header-report";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportOutput {
    schema_id: &'static str,
    signature: u32,
    signature_ok: bool,
    header_length: u8,
    header_length_ok: bool,
    version: u8,
    eeprom_type: u8,
    eeprom_type_label: &'static str,
    data_type: u8,
    data_type_label: &'static str,
    data_size: u16,
    checksum_expected: u16,
    checksum_computed: u16,
    checksum_ok: bool,
    valid: bool,
}

impl From<&ValidationReport> for ReportOutput {
    fn from(report: &ValidationReport) -> Self {
        Self {
            schema_id: REPORT_SCHEMA_ID,
            signature: report.signature,
            signature_ok: report.signature_ok,
            header_length: report.header_length,
            header_length_ok: report.header_length_ok,
            version: report.version,
            eeprom_type: report.eeprom_type,
            eeprom_type_label: report.eeprom_type_label(),
            data_type: report.data_type,
            data_type_label: report.data_type_label(),
            data_size: report.data_size,
            checksum_expected: report.checksum_expected,
            checksum_computed: report.checksum_computed,
            checksum_ok: report.checksum_ok,
            valid: report.is_valid(),
        }
    }
}

/// Print the report to stdout in the selected format.
pub fn print_report(report: &ValidationReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ReportOutput::from(report);
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE", "STATUS"]);
            for row in report_rows(report) {
                table.add_row(vec![row.field.to_string(), row.value, row.status]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in report_rows(report) {
                if row.status.is_empty() {
                    println!("{:<12} {}", row.field, row.value);
                } else {
                    println!("{:<12} {} ({})", row.field, row.value, row.status);
                }
            }
        }
    }
}

/// Log the report the way `decode` shows it: one event per header field,
/// then the checksum calculated from the image.
pub fn log_report(report: &ValidationReport) {
    info!("Decoded header:");
    for row in header_rows(report) {
        let label = format!("{}:", row.field);
        if row.status.is_empty() {
            info!("  {label:<13}{}", row.value);
        } else {
            info!("  {label:<13}{} ({})", row.value, row.status);
        }
    }

    info!("Checksum calculated from image file:");
    if report.checksum_ok {
        info!("  Checksum:    ${:04x} (ok)", report.checksum_computed);
    } else {
        warn!("  Checksum:    ${:04x} (*!!WRONG!!*)", report.checksum_computed);
    }
}

struct ReportRow {
    field: &'static str,
    value: String,
    status: String,
}

fn report_rows(report: &ValidationReport) -> Vec<ReportRow> {
    let mut rows = header_rows(report);
    rows.push(ReportRow {
        field: "Calculated",
        value: format!("${:04x}", report.checksum_computed),
        status: check_status(report.checksum_ok, || {
            format!("${:04x}", report.checksum_expected)
        }),
    });
    rows
}

/// Header fields as read, without the calculated checksum.
fn header_rows(report: &ValidationReport) -> Vec<ReportRow> {
    vec![
        ReportRow {
            field: "Signature",
            value: format!("${:08x}", report.signature),
            status: check_status(report.signature_ok, || format!("${SIGNATURE:08x}")),
        },
        ReportRow {
            field: "Header Len.",
            value: format!("${:02x}", report.header_length),
            status: check_status(report.header_length_ok, || format!("${HEADER_SIZE:02x}")),
        },
        ReportRow {
            field: "Version",
            value: format!("${:02x}", report.version),
            status: String::new(),
        },
        ReportRow {
            field: "EEProm-Type",
            value: format!("${:02x}", report.eeprom_type),
            status: report.eeprom_type_label().to_string(),
        },
        ReportRow {
            field: "Data Type",
            value: format!("${:02x}", report.data_type),
            status: report.data_type_label().to_string(),
        },
        ReportRow {
            field: "Data Size",
            value: format!("${:04x}", report.data_size),
            status: format!("dec: {}", report.data_size),
        },
        ReportRow {
            field: "Checksum",
            value: format!("${:04x}", report.checksum_expected),
            status: String::new(),
        },
    ]
}

fn check_status(ok: bool, expected: impl FnOnce() -> String) -> String {
    if ok {
        "ok".to_string()
    } else {
        format!("NOT OK, expected {}", expected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tusbprom_header::{decode, encode};

    fn report_for(image: &[u8]) -> ValidationReport {
        decode(image).expect("image should decode").1
    }

    #[test]
    fn json_output_carries_labels_and_flags() {
        let image = encode(&[0x01, 0x02, 0x03]).unwrap();
        let out = ReportOutput::from(&report_for(&image));
        let json = serde_json::to_value(&out).unwrap();

        assert_eq!(json["schema_id"], REPORT_SCHEMA_ID);
        assert_eq!(json["eeprom_type_label"], "24C64");
        assert_eq!(json["data_type_label"], "Application");
        assert_eq!(json["checksum_computed"], 6);
        assert_eq!(json["valid"], true);
    }

    #[test]
    fn rows_flag_bad_signature_with_expected_value() {
        let mut image = encode(b"abc").unwrap().to_vec();
        image[..4].copy_from_slice(&[0; 4]);
        let rows = report_rows(&report_for(&image));

        assert_eq!(rows[0].value, "$00000000");
        assert_eq!(rows[0].status, "NOT OK, expected $04513200");
        assert_eq!(rows[1].status, "ok");
    }

    #[test]
    fn rows_show_unknown_types_and_decimal_size() {
        let mut image = encode(&[0u8; 300]).unwrap().to_vec();
        image[6] = 0xFF;
        let rows = report_rows(&report_for(&image));

        assert_eq!(rows[3].status, "unknown");
        assert_eq!(rows[5].value, "$012c");
        assert_eq!(rows[5].status, "dec: 300");
    }

    #[test]
    fn rows_flag_checksum_mismatch() {
        let mut image = encode(&[0x01, 0x02, 0x03]).unwrap().to_vec();
        image[HEADER_SIZE] = 0x02;
        let rows = report_rows(&report_for(&image));

        let calculated = rows.last().unwrap();
        assert_eq!(calculated.value, "$0007");
        assert_eq!(calculated.status, "NOT OK, expected $0006");
    }
}
