use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Province {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn p(name: &'static str, latitude: f64, longitude: f64) -> Province {
    Province {
        name,
        latitude,
        longitude,
    }
}

/// The 81 provinces of Türkiye, by plate code.
pub const PROVINCES: &[Province] = &[
    p("Adana", 37.0000, 35.3213),
    p("Adıyaman", 37.7648, 38.2786),
    p("Afyonkarahisar", 38.7507, 30.5567),
    p("Ağrı", 39.7191, 43.0503),
    p("Amasya", 40.6499, 35.8353),
    p("Ankara", 39.9208, 32.8541),
    p("Antalya", 36.8841, 30.7056),
    p("Artvin", 41.1828, 41.8183),
    p("Aydın", 37.8560, 27.8416),
    p("Balıkesir", 39.6484, 27.8826),
    p("Bilecik", 40.0567, 30.0665),
    p("Bingöl", 39.0626, 40.7696),
    p("Bitlis", 38.4006, 42.1095),
    p("Bolu", 40.5760, 31.5788),
    p("Burdur", 37.4613, 30.0665),
    p("Bursa", 40.2669, 29.0634),
    p("Çanakkale", 40.1553, 26.4142),
    p("Çankırı", 40.6013, 33.6134),
    p("Çorum", 40.5506, 34.9556),
    p("Denizli", 37.7765, 29.0864),
    p("Diyarbakır", 37.9144, 40.2306),
    p("Edirne", 41.6818, 26.5623),
    p("Elazığ", 38.6810, 39.2264),
    p("Erzincan", 39.7500, 39.5000),
    p("Erzurum", 39.9000, 41.2700),
    p("Eskişehir", 39.7767, 30.5206),
    p("Gaziantep", 37.0662, 37.3833),
    p("Giresun", 40.9128, 38.3895),
    p("Gümüşhane", 40.4386, 39.5086),
    p("Hakkari", 37.5833, 43.7333),
    p("Hatay", 36.4018, 36.3498),
    p("Isparta", 37.7648, 30.5566),
    p("Mersin", 36.8000, 34.6333),
    p("İstanbul", 41.0053, 28.9770),
    p("İzmir", 38.4189, 27.1287),
    p("Kars", 40.6167, 43.1000),
    p("Kastamonu", 41.3887, 33.7827),
    p("Kayseri", 38.7312, 35.4787),
    p("Kırklareli", 41.7333, 27.2167),
    p("Kırşehir", 39.1425, 34.1709),
    p("Kocaeli", 40.8533, 29.8815),
    p("Konya", 37.8667, 32.4833),
    p("Kütahya", 39.4167, 29.9833),
    p("Malatya", 38.3552, 38.3095),
    p("Manisa", 38.6191, 27.4289),
    p("Kahramanmaraş", 37.5858, 36.9371),
    p("Mardin", 37.3212, 40.7245),
    p("Muğla", 37.2153, 28.3636),
    p("Muş", 38.9462, 41.7539),
    p("Nevşehir", 38.6939, 34.6857),
    p("Niğde", 37.9667, 34.6833),
    p("Ordu", 40.9839, 37.8764),
    p("Rize", 41.0201, 40.5234),
    p("Sakarya", 40.6940, 30.4358),
    p("Samsun", 41.2928, 36.3313),
    p("Siirt", 37.9333, 41.9500),
    p("Sinop", 42.0231, 35.1531),
    p("Sivas", 39.7477, 37.0179),
    p("Tekirdağ", 40.9833, 27.5167),
    p("Tokat", 40.3167, 36.5500),
    p("Trabzon", 41.0015, 39.7178),
    p("Tunceli", 39.1079, 39.5401),
    p("Şanlıurfa", 37.1591, 38.7969),
    p("Uşak", 38.6823, 29.4082),
    p("Van", 38.4891, 43.4089),
    p("Yozgat", 39.8181, 34.8147),
    p("Zonguldak", 41.4564, 31.7987),
    p("Aksaray", 38.3687, 34.0370),
    p("Bayburt", 40.2552, 40.2249),
    p("Karaman", 37.1759, 33.2287),
    p("Kırıkkale", 39.8468, 33.5153),
    p("Batman", 37.8812, 41.1351),
    p("Şırnak", 37.4187, 42.4918),
    p("Bartın", 41.5811, 32.4610),
    p("Ardahan", 41.1105, 42.7022),
    p("Iğdır", 39.9237, 44.0450),
    p("Yalova", 40.6500, 29.2667),
    p("Karabük", 41.2061, 32.6204),
    p("Kilis", 36.7184, 37.1212),
    p("Osmaniye", 37.0742, 36.2478),
    p("Düzce", 40.8438, 31.1565),
];

pub fn find(name: &str) -> Option<&'static Province> {
    PROVINCES.iter().find(|p| p.name == name)
}

/// Provinces ordered by Turkish alphabet, as shown in the city picker.
pub fn sorted_by_name() -> Vec<&'static Province> {
    let mut list: Vec<&'static Province> = PROVINCES.iter().collect();
    list.sort_by(|a, b| turkish_cmp(a.name, b.name));
    list
}

const ALPHABET: &str = "aâbcçdefgğhıiîjklmnoöprsştuüûvyzqwx";

fn letter_rank(c: char) -> (u32, u32) {
    let lower = match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    };
    match ALPHABET.chars().position(|a| a == lower) {
        Some(pos) => (0, pos as u32),
        None => (1, lower as u32),
    }
}

/// Case-insensitive comparison under Turkish collation.
pub fn turkish_cmp(a: &str, b: &str) -> Ordering {
    let ka = a.chars().map(letter_rank);
    let kb = b.chars().map(letter_rank);
    ka.cmp(kb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_every_province_once() {
        assert_eq!(PROVINCES.len(), 81);
        let mut names: Vec<&str> = PROVINCES.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 81);
    }

    #[test]
    fn turkish_letters_sort_after_their_base_letter() {
        assert_eq!(turkish_cmp("Çorum", "Denizli"), Ordering::Less);
        assert_eq!(turkish_cmp("Bursa", "Çanakkale"), Ordering::Less);
        assert_eq!(turkish_cmp("Iğdır", "İstanbul"), Ordering::Less);
        assert_eq!(turkish_cmp("Sivas", "Şanlıurfa"), Ordering::Less);
        assert_eq!(turkish_cmp("Uşak", "Ünye"), Ordering::Less);
        assert_eq!(turkish_cmp("Kars", "Kars"), Ordering::Equal);
    }

    #[test]
    fn sorted_list_is_alphabetical() {
        let sorted = sorted_by_name();
        assert_eq!(sorted.first().map(|p| p.name), Some("Adana"));
        assert_eq!(sorted.last().map(|p| p.name), Some("Zonguldak"));
        let pos = |n: &str| sorted.iter().position(|p| p.name == n).unwrap();
        assert!(pos("Bursa") < pos("Çanakkale"));
        assert!(pos("Çorum") < pos("Denizli"));
        assert!(pos("Isparta") < pos("İstanbul"));
        assert!(pos("İzmir") < pos("Kahramanmaraş"));
    }

    #[test]
    fn find_is_exact() {
        assert!(find("İstanbul").is_some());
        assert!(find("istanbul").is_none());
    }
}
