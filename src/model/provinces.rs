//! The loaded-once mapping between the geometry layer's English province
//! labels and the canonical Thai names used as the join key by every data
//! source. Lookup is exact-match and case-sensitive in both directions; an
//! unrecognised name is `None` and callers must skip dependent fetches
//! rather than fall back to a default province.

use std::collections::{BTreeMap, HashMap};

/// Bidirectional province name mapping, built once at startup and placed in
/// managed state. Never mutated afterwards.
pub struct ProvinceNameMap {
    to_canonical: HashMap<&'static str, &'static str>,
    to_label: HashMap<&'static str, &'static str>,
}

impl ProvinceNameMap {
    /// Build both lookup directions from the static table.
    pub fn load() -> Self {
        let mut to_canonical = HashMap::with_capacity(PROVINCES.len());
        let mut to_label = HashMap::with_capacity(PROVINCES.len());
        for (label, canonical) in PROVINCES {
            to_canonical.insert(*label, *canonical);
            to_label.insert(*canonical, *label);
        }
        Self {
            to_canonical,
            to_label,
        }
    }

    /// Canonical Thai name for a geometry-layer label.
    pub fn resolve(&self, label: &str) -> Option<&'static str> {
        self.to_canonical.get(label).copied()
    }

    /// Geometry-layer label for a canonical Thai name.
    pub fn label_for(&self, canonical: &str) -> Option<&'static str> {
        self.to_label.get(canonical).copied()
    }

    /// The full mapping, ordered by label for a stable response body.
    pub fn as_sorted_map(&self) -> BTreeMap<&'static str, &'static str> {
        self.to_canonical.iter().map(|(k, v)| (*k, *v)).collect()
    }

    pub fn len(&self) -> usize {
        self.to_canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_canonical.is_empty()
    }
}

/// All 77 provinces, as (geometry label, canonical Thai name).
const PROVINCES: &[(&str, &str)] = &[
    ("Amnat Charoen", "อำนาจเจริญ"),
    ("Ang Thong", "อ่างทอง"),
    ("Bangkok", "กรุงเทพมหานคร"),
    ("Bueng Kan", "บึงกาฬ"),
    ("Buri Ram", "บุรีรัมย์"),
    ("Chachoengsao", "ฉะเชิงเทรา"),
    ("Chai Nat", "ชัยนาท"),
    ("Chaiyaphum", "ชัยภูมิ"),
    ("Chanthaburi", "จันทบุรี"),
    ("Chiang Mai", "เชียงใหม่"),
    ("Chiang Rai", "เชียงราย"),
    ("Chon Buri", "ชลบุรี"),
    ("Chumphon", "ชุมพร"),
    ("Kalasin", "กาฬสินธุ์"),
    ("Kamphaeng Phet", "กำแพงเพชร"),
    ("Kanchanaburi", "กาญจนบุรี"),
    ("Khon Kaen", "ขอนแก่น"),
    ("Krabi", "กระบี่"),
    ("Lampang", "ลำปาง"),
    ("Lamphun", "ลำพูน"),
    ("Loei", "เลย"),
    ("Lop Buri", "ลพบุรี"),
    ("Mae Hong Son", "แม่ฮ่องสอน"),
    ("Maha Sarakham", "มหาสารคาม"),
    ("Mukdahan", "มุกดาหาร"),
    ("Nakhon Nayok", "นครนายก"),
    ("Nakhon Pathom", "นครปฐม"),
    ("Nakhon Phanom", "นครพนม"),
    ("Nakhon Ratchasima", "นครราชสีมา"),
    ("Nakhon Sawan", "นครสวรรค์"),
    ("Nakhon Si Thammarat", "นครศรีธรรมราช"),
    ("Nan", "น่าน"),
    ("Narathiwat", "นราธิวาส"),
    ("Nong Bua Lam Phu", "หนองบัวลำภู"),
    ("Nong Khai", "หนองคาย"),
    ("Nonthaburi", "นนทบุรี"),
    ("Pathum Thani", "ปทุมธานี"),
    ("Pattani", "ปัตตานี"),
    ("Phangnga", "พังงา"),
    ("Phatthalung", "พัทลุง"),
    ("Phayao", "พะเยา"),
    ("Phetchabun", "เพชรบูรณ์"),
    ("Phetchaburi", "เพชรบุรี"),
    ("Phichit", "พิจิตร"),
    ("Phitsanulok", "พิษณุโลก"),
    ("Phra Nakhon Si Ayutthaya", "พระนครศรีอยุธยา"),
    ("Phrae", "แพร่"),
    ("Phuket", "ภูเก็ต"),
    ("Prachin Buri", "ปราจีนบุรี"),
    ("Prachuap Khiri Khan", "ประจวบคีรีขันธ์"),
    ("Ranong", "ระนอง"),
    ("Ratchaburi", "ราชบุรี"),
    ("Rayong", "ระยอง"),
    ("Roi Et", "ร้อยเอ็ด"),
    ("Sa Kaeo", "สระแก้ว"),
    ("Sakon Nakhon", "สกลนคร"),
    ("Samut Prakan", "สมุทรปราการ"),
    ("Samut Sakhon", "สมุทรสาคร"),
    ("Samut Songkhram", "สมุทรสงคราม"),
    ("Saraburi", "สระบุรี"),
    ("Satun", "สตูล"),
    ("Si Sa Ket", "ศรีสะเกษ"),
    ("Sing Buri", "สิงห์บุรี"),
    ("Songkhla", "สงขลา"),
    ("Sukhothai", "สุโขทัย"),
    ("Suphan Buri", "สุพรรณบุรี"),
    ("Surat Thani", "สุราษฎร์ธานี"),
    ("Surin", "สุรินทร์"),
    ("Tak", "ตาก"),
    ("Trang", "ตรัง"),
    ("Trat", "ตราด"),
    ("Ubon Ratchathani", "อุบลราชธานี"),
    ("Udon Thani", "อุดรธานี"),
    ("Uthai Thani", "อุทัยธานี"),
    ("Uttaradit", "อุตรดิตถ์"),
    ("Yala", "ยะลา"),
    ("Yasothon", "ยโสธร"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_labels() {
        let map = ProvinceNameMap::load();
        assert_eq!(map.resolve("Chiang Mai"), Some("เชียงใหม่"));
        assert_eq!(map.resolve("Phuket"), Some("ภูเก็ต"));
        assert_eq!(map.resolve("Bangkok"), Some("กรุงเทพมหานคร"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let map = ProvinceNameMap::load();
        assert_eq!(map.resolve("chiang mai"), None);
        assert_eq!(map.resolve("CHIANG MAI"), None);
    }

    #[test]
    fn unknown_labels_are_absent() {
        let map = ProvinceNameMap::load();
        assert_eq!(map.resolve("Atlantis"), None);
        assert_eq!(map.label_for("nowhere"), None);
        assert_eq!(map.resolve(""), None);
    }

    #[test]
    fn reverse_lookup_round_trips() {
        let map = ProvinceNameMap::load();
        for (label, canonical) in PROVINCES {
            assert_eq!(map.resolve(label), Some(*canonical));
            assert_eq!(map.label_for(canonical), Some(*label));
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        // Both maps would silently shrink if the table repeated a name.
        let map = ProvinceNameMap::load();
        assert_eq!(map.len(), PROVINCES.len());
        assert_eq!(map.as_sorted_map().len(), PROVINCES.len());
        assert_eq!(
            PROVINCES.len(),
            map.to_label.len(),
            "duplicate canonical name in table"
        );
    }
}
