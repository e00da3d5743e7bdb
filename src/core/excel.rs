use crate::core::calendar::{format_day, Period};
use crate::domain::model::{
    DayStatus, ReportRow, CATEGORY, SPECIALIST_GROUP, STATUS_CLOSED, STATUS_OPEN,
};
use crate::utils::error::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

pub const SHEET_NAME: &str = "Reporte";
pub const REPORT_TITLE: &str = "REPORTE ACTIVIDADES FEDERECAFE";

const NAVY: Color = Color::RGB(0x002060);
const DAY_OFF_GRAY: Color = Color::RGB(0xD9D9D9);
const COLUMN_WIDTH: f64 = 25.0;

const HEADERS: [&str; 8] = [
    "FECHA",
    "ID CASO",
    "FECHA REGISTRO",
    "ASUNTO",
    "CATEGORIA",
    "GRUPO DE ESPECIALISTAS",
    "ESTADO",
    "FECHA DE SOLUCIÓN",
];

/// Column (zero-based) that carries the FESTIVO/SÁBADO/DOMINGO label.
const SUBJECT_COL: u16 = 3;

/// Re-running within the same month produces the same name and overwrites.
pub fn report_file_name(worker: &str, period: &Period) -> String {
    format!(
        "Reporte Samtel_FEDERACAFE_{}_{} {}.xlsx",
        worker,
        period.month_name(),
        period.year()
    )
}

/// Renders the full report into an in-memory workbook: merged title banner,
/// worker/period row, header row, then one styled row per classified day.
pub fn build_workbook(worker: &str, period: &Period, rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let title_format = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_font_color(Color::White)
        .set_background_color(NAVY)
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let banner_label_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(NAVY)
        .set_pattern(FormatPattern::Solid);

    let meta_format = Format::new().set_bold().set_font_color(NAVY);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(NAVY)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_border_color(NAVY)
        .set_text_wrap()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let cell_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_border_color(NAVY)
        .set_text_wrap()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    // Gray italic style for holiday/weekend rows; the date cell keeps the
    // plain style, only columns B..H are shaded.
    let day_off_format = cell_format
        .clone()
        .set_background_color(DAY_OFF_GRAY)
        .set_pattern(FormatPattern::Solid)
        .set_italic();

    sheet.merge_range(0, 0, 0, 7, REPORT_TITLE, &title_format)?;

    sheet.write_with_format(1, 0, "TRABAJADOR", &banner_label_format)?;
    sheet.write_with_format(1, 1, worker, &meta_format)?;
    sheet.write_with_format(1, 2, format!("Periodo: {}", period.label()), &meta_format)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_with_format(2, col as u16, *header, &header_format)?;
    }

    let mut row_num = 3u32;
    for row in rows {
        match row {
            ReportRow::DayOff { date, label } => {
                sheet.write_with_format(row_num, 0, format_day(*date), &cell_format)?;
                for col in 1..HEADERS.len() as u16 {
                    if col == SUBJECT_COL {
                        sheet.write_with_format(row_num, col, *label, &day_off_format)?;
                    } else {
                        sheet.write_with_format(row_num, col, "", &day_off_format)?;
                    }
                }
            }
            ReportRow::Activity {
                date,
                case_id,
                registered_on,
                subject,
                status,
            } => {
                let (estado, solved_on) = match status {
                    DayStatus::Closed { solved_on } => (STATUS_CLOSED, format_day(*solved_on)),
                    DayStatus::Open => (STATUS_OPEN, String::new()),
                };
                let values = [
                    format_day(*date),
                    case_id.clone(),
                    format_day(*registered_on),
                    subject.clone(),
                    CATEGORY.to_string(),
                    SPECIALIST_GROUP.to_string(),
                    estado.to_string(),
                    solved_on,
                ];
                for (col, value) in values.iter().enumerate() {
                    sheet.write_with_format(row_num, col as u16, value.as_str(), &cell_format)?;
                }
            }
        }
        row_num += 1;
    }

    for col in 0..HEADERS.len() as u16 {
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn file_name_carries_worker_month_and_year() {
        let period = Period::for_month(date(2025, 5, 15));
        assert_eq!(
            report_file_name("Prueba Uno", &period),
            "Reporte Samtel_FEDERACAFE_Prueba Uno_Mayo 2025.xlsx"
        );
    }

    #[test]
    fn workbook_builds_for_mixed_rows() {
        let period = Period::for_month(date(2025, 5, 15));
        let rows = vec![
            ReportRow::Activity {
                date: date(2025, 5, 1),
                case_id: "CASO-1".to_string(),
                registered_on: date(2025, 5, 1),
                subject: "Ajuste".to_string(),
                status: DayStatus::Open,
            },
            ReportRow::DayOff {
                date: date(2025, 5, 3),
                label: "SÁBADO",
            },
            ReportRow::Activity {
                date: date(2025, 5, 5),
                case_id: "CASO-1".to_string(),
                registered_on: date(2025, 5, 1),
                subject: "Ajuste".to_string(),
                status: DayStatus::Closed {
                    solved_on: date(2025, 5, 5),
                },
            },
        ];

        let buffer = build_workbook("Prueba Uno", &period, &rows).unwrap();
        // xlsx files are zip archives.
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn workbook_builds_with_no_data_rows() {
        let period = Period::for_month(date(2025, 5, 15));
        let buffer = build_workbook("Prueba Uno", &period, &[]).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }
}
