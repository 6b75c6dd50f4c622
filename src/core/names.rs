// File: src/core/names.rs

/// Curated Arabic names and their preferred Latin spelling.
/// Keys are written in their usual spelling; the dictionary normalizes them.
pub const BUILTIN_NAMES: &[(&str, &str)] = &[
    // Male names
    ("محمد", "Mohammed"),
    ("أحمد", "Ahmed"),
    ("علي", "Ali"),
    ("حسن", "Hassan"),
    ("حسين", "Hussein"),
    ("عبدالله", "Abdullah"),
    ("عبدالرحمن", "Abdulrahman"),
    ("خالد", "Khalid"),
    ("سعد", "Saad"),
    ("فهد", "Fahad"),
    ("عمر", "Omar"),
    ("يوسف", "Youssef"),
    ("إبراهيم", "Ibrahim"),
    ("عبدالعزيز", "Abdulaziz"),
    ("سلطان", "Sultan"),
    ("طارق", "Tarek"),
    ("ماجد", "Majed"),
    ("سالم", "Salem"),
    ("راشد", "Rashid"),
    ("ناصر", "Nasser"),
    ("بدر", "Badr"),
    ("زياد", "Ziad"),
    ("وليد", "Waleed"),
    ("سامي", "Sami"),
    ("عادل", "Adel"),
    ("كريم", "Kareem"),
    ("هشام", "Hisham"),
    ("عثمان", "Othman"),
    ("صالح", "Saleh"),
    ("مصطفى", "Mustafa"),
    // Female names
    ("فاطمة", "Fatima"),
    ("عائشة", "Aisha"),
    ("خديجة", "Khadija"),
    ("مريم", "Mariam"),
    ("زينب", "Zainab"),
    ("أسماء", "Asma"),
    ("هند", "Hind"),
    ("نورا", "Nora"),
    ("سارة", "Sarah"),
    ("ليلى", "Layla"),
    ("أمل", "Amal"),
    ("رنا", "Rana"),
    ("دينا", "Dina"),
    ("منى", "Mona"),
    ("هالة", "Hala"),
    ("سمر", "Samar"),
    ("رؤى", "Rua"),
    ("شيماء", "Shaima"),
    ("إيمان", "Iman"),
    ("هدى", "Huda"),
    ("نادية", "Nadia"),
    ("سلمى", "Salma"),
    ("ريم", "Reem"),
    ("غادة", "Ghada"),
    ("وفاء", "Wafaa"),
    // Omani male names
    ("سعيد", "Said"),
    ("حمد", "Hamad"),
    ("سالم", "Salem"),
    ("راشد", "Rashid"),
    ("محسن", "Mohsen"),
    ("سليمان", "Sulaiman"),
    ("عيسى", "Issa"),
    ("يعقوب", "Yaqoub"),
    ("موسى", "Musa"),
    ("داود", "Dawood"),
    ("سيف", "Saif"),
    ("هلال", "Hilal"),
    ("قيس", "Qais"),
    ("عامر", "Amer"),
    ("جابر", "Jaber"),
    ("حارث", "Harith"),
    ("عبدالمجيد", "Abdulmajeed"),
    ("عبدالكريم", "Abdulkareem"),
    ("عبدالحميد", "Abdulhameed"),
    ("عبدالوهاب", "Abdulwahab"),
    // Omani female names
    ("شمسة", "Shamsa"),
    ("موزة", "Moza"),
    ("عزة", "Azza"),
    ("بثينة", "Buthaina"),
    ("ثريا", "Thuraya"),
    ("جميلة", "Jamila"),
    ("كوثر", "Kawthar"),
    ("لطيفة", "Latifa"),
    ("منيرة", "Munira"),
    ("نعيمة", "Naima"),
    ("وردة", "Warda"),
    ("يسرى", "Yusra"),
    ("زهراء", "Zahra"),
    ("حليمة", "Halima"),
    ("رقية", "Ruqaya"),
    ("سكينة", "Sakina"),
    ("أميمة", "Umaima"),
    ("جويرية", "Juwayriya"),
    ("حفصة", "Hafsa"),
    ("صفية", "Safiya"),
];
