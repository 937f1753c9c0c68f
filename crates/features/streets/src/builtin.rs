//! Built-in vocabulary, one entry per language in alphabetical order.

/// `(language, full terms, abbreviations)`, most common term first.
pub(crate) static BUILTIN: &[(&str, &[&str], &[&str])] = &[
    (
        "Albanian",
        &["Rruga", "Bulevardi", "Sheshi", "Lagjja"],
        &["Rr.", "Blv.", "Sh.", "Lagj."],
    ),
    (
        "Arabic",
        &["شارع", "طريق", "ميدان", "زقاق"],
        &["ش.", "ط.", "م.", "ز."],
    ),
    (
        "Bengali",
        &["রাস্তা", "সড়ক", "পথ", "গলি"],
        &["রাস্তা", "সড়ক", "পথ", "গলি"],
    ),
    (
        "Bulgarian",
        &["Улица", "Булевард", "Площад", "Път"],
        &["ул.", "бул.", "пл.", "път"],
    ),
    (
        "Chinese",
        &["路", "街", "大道", "巷"],
        &["路", "街", "大道", "巷"],
    ),
    (
        "Croatian",
        &["Ulica", "Cesta", "Trg", "Avenija", "Put"],
        &["ul.", "c.", "trg", "av.", "put"],
    ),
    (
        "Czech",
        &["Ulice", "Náměstí", "Třída", "Cesta", "Nábřeží"],
        &["ul.", "nám.", "tř.", "cesta", "nábř."],
    ),
    (
        "Danish",
        &["Gade", "Vej", "Plads", "Torv", "Allé"],
        &["gade", "vej", "pl.", "torv", "allé"],
    ),
    (
        "Dutch",
        &["Straat", "Laan", "Plein", "Weg", "Gracht", "Kade"],
        &["Str.", "Ln.", "Pl.", "Weg", "Gr.", "Kade"],
    ),
    (
        "Dzongkha",
        &["ལམ", "འགྲུལ་ལམ", "གྲོང་ཚོ", "མེལ་ལམ"],
        &["ལ.", "འག.", "གྲ.", "མེ."],
    ),
    (
        "English",
        &["Street", "Road", "Avenue", "Lane", "Drive", "Way", "Place", "Court"],
        &["St", "Rd", "Ave", "Ln", "Dr", "Way", "Pl", "Ct"],
    ),
    (
        "Estonian",
        &["Tänav", "Tee", "Väljak", "Puiestee"],
        &["tn", "tee", "välj.", "pst"],
    ),
    (
        "Finnish",
        &["Katu", "Tie", "Tori", "Kuja", "Puistotie"],
        &["k.", "tie", "tori", "kj.", "pt."],
    ),
    (
        "French",
        &["Rue", "Avenue", "Boulevard", "Place", "Chemin", "Route", "Impasse"],
        &["R.", "Ave", "Bd", "Pl", "Ch.", "Rte", "Imp."],
    ),
    (
        "German",
        &["Straße", "Gasse", "Platz", "Weg", "Allee", "Ring"],
        &["Str.", "G.", "Pl.", "Weg", "All.", "Ring"],
    ),
    (
        "Greek",
        &["Οδός", "Λεωφόρος", "Πλατεία", "Δρόμος"],
        &["Οδ.", "Λεωφ.", "Πλ.", "Δρ."],
    ),
    (
        "Hebrew",
        &["רחוב", "שדרות", "כיכר", "מעלה"],
        &["רח'", "שד'", "כיכר", "מעלה"],
    ),
    (
        "Hindi",
        &["सड़क", "मार्ग", "गली", "चौक"],
        &["सड़क", "मार्ग", "गली", "चौक"],
    ),
    (
        "Hungarian",
        &["Utca", "Út", "Tér", "Körút", "Sétány"],
        &["u.", "út", "tér", "krt.", "sét."],
    ),
    (
        "Icelandic",
        &["Gata", "Vegur", "Torg", "Stræti"],
        &["g.", "veg.", "torg", "str."],
    ),
    (
        "Indonesian",
        &["Jalan", "Gang", "Lorong", "Komplek"],
        &["Jl.", "Gg.", "Lr.", "Komp."],
    ),
    (
        "Italian",
        &["Via", "Strada", "Piazza", "Corso", "Viale", "Largo"],
        &["V.", "Str.", "P.za", "C.so", "V.le", "Lgo."],
    ),
    (
        "Japanese",
        &["通り", "街道", "大通り", "小路"],
        &["通", "街道", "大通", "小路"],
    ),
    (
        "Khmer",
        &["ផ្លូវ", "ជ័រផ្លូវ", "ផ្លូវរទេះ", "មហាវិថី"],
        &["ផ.", "ជ.", "រទ.", "មហ."],
    ),
    (
        "Korean",
        &["길", "대로", "로", "거리"],
        &["길", "대로", "로", "거리"],
    ),
    (
        "Lao",
        &["ຖະໜນ", "ທາງ", "ຊອກ", "ຕະຫຼາດ"],
        &["ຖ.", "ທ.", "ຊ.", "ຕ."],
    ),
    (
        "Latvian",
        &["Iela", "Ceļš", "Laukums", "Bulvāris"],
        &["iela", "ceļš", "laukums", "bulv."],
    ),
    (
        "Lithuanian",
        &["Gatvė", "Kelias", "Aikštė", "Bulvaras"],
        &["g.", "kel.", "a.", "bulv."],
    ),
    (
        "Macedonian",
        &["Улица", "Булевар", "Плоштад"],
        &["ул.", "бул.", "пл."],
    ),
    (
        "Malay",
        &["Jalan", "Lorong", "Lebuh", "Persiaran"],
        &["Jln", "Lg", "Lbh", "Psrn"],
    ),
    (
        "Mongolian",
        &["Гудамж", "Зам", "Талбай", "Гудамжны өргөн чөлөө"],
        &["г.", "з.", "т.", "гөч."],
    ),
    (
        "Montenegrin",
        &["Улица", "Булевар", "Трг"],
        &["ул.", "бул.", "трг"],
    ),
    (
        "Norwegian",
        &["Gate", "Vei", "Plass", "Torg", "Allé"],
        &["gt.", "vei", "pl.", "torg", "allé"],
    ),
    (
        "Polish",
        &["Ulica", "Aleja", "Plac", "Droga", "Osiedle"],
        &["ul.", "al.", "pl.", "dr.", "os."],
    ),
    (
        "Portuguese",
        &["Rua", "Avenida", "Praça", "Largo", "Travessa", "Estrada"],
        &["R.", "Av.", "Pça.", "Lgo.", "Tv.", "Est."],
    ),
    (
        "Romanian",
        &["Strada", "Bulevardul", "Piața", "Calea", "Aleea"],
        &["Str.", "Bd.", "Pța.", "Cal.", "Al."],
    ),
    (
        "Russian",
        &["Улица", "Проспект", "Площадь", "Переулок", "Бульвар"],
        &["ул.", "пр-т", "пл.", "пер.", "б-р"],
    ),
    (
        "Serbian",
        &["Улица", "Булевар", "Трг", "Пут"],
        &["ул.", "бул.", "трг", "пут"],
    ),
    (
        "Sinhala",
        &["වීදිය", "මාර්ගය", "පාර", "පදවිය"],
        &["වී.", "මා.", "පා.", "පද."],
    ),
    (
        "Slovak",
        &["Ulica", "Cesta", "Námestie", "Trieda"],
        &["ul.", "c.", "nám.", "tr."],
    ),
    (
        "Slovenian",
        &["Ulica", "Cesta", "Trg", "Pot"],
        &["ul.", "c.", "trg", "pot"],
    ),
    (
        "Spanish",
        &["Calle", "Avenida", "Plaza", "Carrera", "Paseo", "Camino"],
        &["C/", "Av.", "Pza.", "Cra.", "P°", "Cam."],
    ),
    (
        "Swedish",
        &["Gata", "Väg", "Torg", "Gränd", "Allé"],
        &["g.", "väg", "torg", "gr.", "allé"],
    ),
    (
        "Tamil",
        &["தெரு", "சாலை", "வீதிகள்", "பாதை"],
        &["தெ.", "சா.", "வீ.", "பா."],
    ),
    (
        "Thai",
        &["ถนน", "ซอย", "ตรอก", "ย่าน"],
        &["ถ.", "ซ.", "ตรอก", "ย่าน"],
    ),
    (
        "Turkish",
        &["Sokak", "Cadde", "Bulvar", "Meydan", "Yol"],
        &["Sk.", "Cd.", "Blv.", "Myd.", "Yolu"],
    ),
    (
        "Ukrainian",
        &["Вулиця", "Проспект", "Площа", "Провулок", "Бульвар"],
        &["вул.", "просп.", "пл.", "пров.", "бульв."],
    ),
    (
        "Urdu",
        &["سڑک", "راہ", "گلی", "چوک"],
        &["سڑک", "راہ", "گلی", "چوک"],
    ),
    (
        "Vietnamese",
        &["Đường", "Phố", "Quảng trường", "Hẻm"],
        &["Đ.", "P.", "QT.", "Hẻm"],
    ),
];
