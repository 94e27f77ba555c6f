use std::collections::HashSet;

use super::{RecordSupplier, SupplierId, SupplyError};
use crate::{InstrumentRecord, Ticker};

pub const NAMED_ISSUER_COUNT: usize = NAMED.len();
pub const FILLER_COUNT: usize = 170;

/// (ticker, English name, Japanese name, sector, yield %, payout %, ROE %, price ¥)
type NamedRow = (&'static str, &'static str, &'static str, &'static str, f64, f64, f64, f64);

const NAMED: [NamedRow; 30] = [
    ("2914.T", "JT", "日本たばこ産業", "Foods", 6.2, 75.0, 16.5, 4150.0),
    ("8306.T", "MUFG", "三菱UFJ", "Banking", 3.8, 38.0, 8.5, 1460.0),
    ("8316.T", "SMFG", "三井住友", "Banking", 4.0, 40.0, 8.0, 8850.0),
    ("8411.T", "Mizuho", "みずほFG", "Banking", 3.7, 40.0, 7.2, 3150.0),
    ("8058.T", "Mitsubishi Corp", "三菱商事", "Trading", 3.5, 25.0, 15.5, 2860.0),
    ("8001.T", "ITOCHU", "伊藤忠商事", "Trading", 3.1, 28.0, 17.0, 6620.0),
    ("8031.T", "Mitsui", "三井物産", "Trading", 3.2, 28.0, 15.0, 3100.0),
    ("9432.T", "NTT", "日本電信電話", "Telecom", 3.2, 35.0, 12.5, 180.0),
    ("9433.T", "KDDI", "KDDI", "Telecom", 3.8, 42.0, 13.5, 4800.0),
    ("7203.T", "Toyota", "トヨタ自動車", "Auto", 2.8, 30.0, 11.5, 2650.0),
    ("6758.T", "Sony", "ソニーグループ", "Electronics", 0.8, 15.0, 14.5, 13500.0),
    ("9503.T", "Kansai Elec", "関西電力", "Utility", 3.1, 25.0, 9.0, 2100.0),
    ("9502.T", "Chubu Elec", "中部電力", "Utility", 3.2, 30.0, 8.5, 1950.0),
    ("1605.T", "INPEX", "INPEX", "Mining", 4.0, 40.0, 10.2, 2100.0),
    ("5020.T", "ENEOS", "ENEOS", "Energy", 4.1, 35.0, 9.5, 750.0),
    ("9101.T", "NYK Line", "日本郵船", "Shipping", 5.1, 30.0, 12.0, 4800.0),
    ("8766.T", "Tokio Marine", "東京海上", "Insurance", 3.6, 45.0, 14.0, 3800.0),
    ("8591.T", "ORIX", "オリックス", "Finance", 4.3, 33.0, 9.8, 3240.0),
    ("1928.T", "Sekisui House", "積水ハウス", "Housing", 3.8, 40.0, 10.8, 3250.0),
    ("4063.T", "Shin-Etsu", "信越化学工業", "Chemicals", 1.8, 25.0, 18.2, 5950.0),
    ("4502.T", "Takeda", "武田薬品", "Pharma", 4.8, 95.0, 5.5, 4100.0),
    ("6861.T", "Keyence", "キーエンス", "Electronics", 0.5, 10.0, 17.5, 68000.0),
    ("8035.T", "TEL", "東京エレクトロン", "Semicon", 1.5, 35.0, 20.0, 35000.0),
    ("7974.T", "Nintendo", "任天堂", "Gaming", 3.1, 50.0, 15.0, 8000.0),
    ("9020.T", "JR East", "JR東日本", "Railway", 2.5, 40.0, 6.0, 8800.0),
    ("8801.T", "Mitsui Fud.", "三井不動産", "Real Estate", 2.2, 30.0, 9.0, 1500.0),
    ("7267.T", "Honda", "ホンダ", "Auto", 3.5, 30.0, 8.5, 1600.0),
    ("4901.T", "Fujifilm", "富士フイルム", "Precision", 2.0, 30.0, 10.0, 3500.0),
    ("6501.T", "Hitachi", "日立製作所", "Electronics", 1.2, 25.0, 12.0, 12500.0),
    ("6301.T", "Komatsu", "小松製作所", "Machinery", 3.8, 40.0, 13.5, 4200.0),
];

/// (English name, Japanese name, sector) rotated through to build filler rows.
const FILLER_REFERENCES: [(&str, &str, &str); 18] = [
    ("Taisei", "大成建設", "Construction"),
    ("Daiwa House", "大和ハウス", "Construction"),
    ("Asahi", "アサヒG", "Foods"),
    ("Kirin", "キリンHD", "Foods"),
    ("Asahi Kasei", "旭化成", "Chemicals"),
    ("Astellas", "アステラス", "Pharma"),
    ("Nippon Steel", "日本製鉄", "Steel"),
    ("Fujitsu", "富士通", "Electronics"),
    ("Denso", "デンソー", "Auto"),
    ("Canon", "キヤノン", "Electronics"),
    ("Sumitomo", "住友商事", "Trading"),
    ("Marubeni", "丸紅", "Trading"),
    ("AEON", "イオン", "Retail"),
    ("JAL", "日本航空", "Airline"),
    ("TEPCO", "東京電力", "Utility"),
    ("J-POWER", "電源開発", "Utility"),
    ("Resona", "りそなHD", "Banking"),
    ("SMTH", "三井住友トラ", "Banking"),
];

const FILLER_CODE_BASE: u32 = 1800;

/// Static TSE Prime sample universe: 30 named issuers followed by generated
/// filler rows. Ids are unique; a filler code that collides with a named
/// issuer is skipped.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinUniverse {
    filler_count: usize,
}

impl BuiltinUniverse {
    pub const fn new(filler_count: usize) -> Self {
        Self { filler_count }
    }

    /// Only the 30 named issuers.
    pub const fn named_only() -> Self {
        Self::new(0)
    }
}

impl Default for BuiltinUniverse {
    fn default() -> Self {
        Self::new(FILLER_COUNT)
    }
}

impl RecordSupplier for BuiltinUniverse {
    fn id(&self) -> SupplierId {
        SupplierId::Builtin
    }

    fn records(&self) -> Result<Vec<InstrumentRecord>, SupplyError> {
        let mut records = Vec::with_capacity(NAMED.len() + self.filler_count);
        for (id, name, name_jp, sector, dividend_yield, payout_ratio, roe, price) in NAMED {
            records.push(InstrumentRecord::new(
                Ticker::parse(id)?,
                name,
                name_jp,
                sector,
                roe,
                dividend_yield,
                payout_ratio,
                price,
            )?);
        }

        let taken: HashSet<Ticker> = records.iter().map(|record| record.id.clone()).collect();
        let mut index: u32 = 0;
        let mut produced = 0;
        while produced < self.filler_count {
            index += 1;
            let id = Ticker::parse(&format!("{}.T", FILLER_CODE_BASE + index))?;
            if taken.contains(&id) {
                tracing::trace!(%id, "filler code collides with named issuer");
                continue;
            }

            records.push(filler(id, index)?);
            produced += 1;
        }

        tracing::debug!(count = records.len(), "built-in universe assembled");
        Ok(records)
    }
}

fn filler(id: Ticker, index: u32) -> Result<InstrumentRecord, SupplyError> {
    let (name, name_jp, sector) = FILLER_REFERENCES[index as usize % FILLER_REFERENCES.len()];
    let record = InstrumentRecord::new(
        id,
        format!("{name} (P#{index})"),
        format!("{name_jp} (プライム#{index})"),
        sector,
        7.0 + f64::from(index % 5),
        3.0 + f64::from(index % 6) * 0.1,
        40.0 + f64::from(index % 10),
        2000.0 + f64::from(index) * 10.0,
    )?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_universe_has_two_hundred_unique_ids() {
        let records = BuiltinUniverse::default().records().expect("universe");

        assert_eq!(records.len(), NAMED_ISSUER_COUNT + FILLER_COUNT);
        let unique: HashSet<&Ticker> = records.iter().map(|record| &record.id).collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn sekisui_house_code_is_not_reused_by_filler() {
        let records = BuiltinUniverse::default().records().expect("universe");
        let matches: Vec<&InstrumentRecord> = records
            .iter()
            .filter(|record| record.id.as_str() == "1928.T")
            .collect();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Sekisui House");
    }

    #[test]
    fn filler_rows_follow_generation_formula() {
        let records = BuiltinUniverse::new(7).records().expect("universe");
        let seventh = records.last().expect("filler row");

        assert_eq!(seventh.id.as_str(), "1807.T");
        assert_eq!(seventh.name, "Fujitsu (P#7)");
        assert_eq!(seventh.name_localized, "富士通 (プライム#7)");
        assert_eq!(seventh.roe, 9.0);
        assert!((seventh.dividend_yield - 3.1).abs() < 1e-9);
        assert_eq!(seventh.payout_ratio, 47.0);
        assert_eq!(seventh.price, 2070.0);
    }

    #[test]
    fn named_only_universe_keeps_source_values() {
        let records = BuiltinUniverse::named_only().records().expect("universe");
        assert_eq!(records.len(), NAMED_ISSUER_COUNT);

        let takeda = records
            .iter()
            .find(|record| record.id.as_str() == "4502.T")
            .expect("Takeda present");
        assert_eq!(takeda.roe, 5.5);
        assert_eq!(takeda.dividend_yield, 4.8);
        assert_eq!(takeda.payout_ratio, 95.0);
    }
}
