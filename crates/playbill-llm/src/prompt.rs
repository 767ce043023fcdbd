//! Prompt construction for the completion model
//!
//! A fixed instruction template with the OCR text interpolated verbatim.
//! Pure formatting, no transport concerns, so the template stays
//! independently testable.
//!
//! The instruction is written in Turkish because the posters this pipeline
//! reads are Turkish; the model is told to answer in the language of the
//! source text either way.

/// Fixed user turn sent after the system instruction
pub const USER_TURN: &str = "Analiz et ve JSON dön.";

const PROMPT_HEADER: &str = r#"GÖREVİN:
Bu metinden SADECE aşağıdaki alanları çıkar ve SADECE geçerli bir JSON döndür.

Alanlar: (mekan, konum, tarih, saat, etkinlik, sanatci)

KURALLAR:
- Metnin dilinde yaz
- Emin olmadığın alanı null yap, tahmin etme
- Açıklama yazma, sadece JSON döndür

MEKAN BULMA STRATEJİSİ (ÖNEMLİ):
1. 'mekan': SADECE işletme adını yaz (Örn: "Geyik Pub", "Jolly Joker"). Şehir adı buraya YAZILMAZ.
2. 'konum': SADECE şehir veya semt adını yaz (Örn: "Fethiye", "Muğla", "Hisarönü").
3. Sosyal medya kullanıcı adı ipucunu kullan (örn: "geyikfethiye" -> mekan: "Geyik Pub", konum: "Fethiye").
4. OCR hatalarını düzelt ("KGEYIK" -> "Geyik").

Metin:
"#;

const PROMPT_FOOTER: &str = r#"

İSTENEN ÇIKTI (SADECE JSON):
{
    "mekan": "Sadece İşletme Adı",
    "konum": "Sadece Şehir/Semt",
    "tarih": "GG Ay (Örn: 31 Ocak)",
    "saat": "SS:DK",
    "etkinlik": "Etkinlik Türü",
    "sanatci": "Sanatçı Adı"
}"#;

/// Build the system instruction embedding `text` verbatim.
///
/// Names the six target fields, demands a JSON-only answer in the source
/// language, tells the model to null out uncertain fields rather than guess,
/// and walks through separating a venue name from a locality name.
pub fn system_prompt(text: &str) -> String {
    let mut prompt =
        String::with_capacity(PROMPT_HEADER.len() + text.len() + PROMPT_FOOTER.len() + 2);
    prompt.push_str(PROMPT_HEADER);
    prompt.push('"');
    prompt.push_str(text);
    prompt.push('"');
    prompt.push_str(PROMPT_FOOTER);
    prompt
}
