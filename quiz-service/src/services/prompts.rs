//! Prompt construction for the three generation surfaces.
//!
//! Prompt wording and the topic table are part of the wire contract
//! with the deployed front-end and stay in Indonesian.

use super::providers::Prompt;

/// Topic key used when the requested key is not in the table.
pub const DEFAULT_TOPIC_KEY: &str = "campuran";

/// Known topic keys and their full descriptions.
const TOPIC_MAP: [(&str, &str); 7] = [
    (
        "campuran",
        "Campuran (Pengetahuan PLN, Keuangan, Operasional, SDM, Pemasaran, GCG)",
    ),
    (
        "pln",
        "Pengetahuan Umum PLN, Visi Misi, AKHLAK, RUPTL 2025-2034, dan PLN Indonesia Power",
    ),
    (
        "keuangan",
        "Manajemen Keuangan (Analisis Rasio, NPV, IRR, WACC, Pasar Modal)",
    ),
    (
        "operasional",
        "Manajemen Operasional (TQM, Six Sigma, Supply Chain, PERT/CPM, Manajemen Proyek)",
    ),
    (
        "pemasaran",
        "Manajemen Pemasaran (STP, 4P, 7P, SERVQUAL, Branding)",
    ),
    (
        "sdm",
        "Manajemen SDM (Rekrutmen, Pelatihan, Kompensasi, Penilaian Kinerja, Hubungan Industrial)",
    ),
    (
        "strategis_gcg",
        "Manajemen Strategis (SWOT, PESTEL, Porter 5 Forces) dan Good Corporate Governance (GCG, Prinsip TARIF, Teori Agensi)",
    ),
];

/// Resolve a topic key to its description, falling back to the mixed
/// topic for unrecognized keys.
pub fn resolve_topic(key: &str) -> &'static str {
    TOPIC_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| TOPIC_MAP.iter().find(|(k, _)| *k == DEFAULT_TOPIC_KEY))
        .map(|(_, description)| *description)
        .unwrap_or_default()
}

/// Prompt for multiple-choice question generation.
pub fn question_prompt(topic_key: &str, num: u32) -> Prompt {
    let topic = resolve_topic(topic_key);

    let system_instruction = format!(
        "Anda adalah Asisten Ahli TKB PLN. Misi Anda adalah membuat soal Tes Kemampuan Bidang (TKB) Non-Teknik untuk rekrutmen PLN (posisi Manajemen).\n\
PERINTAH: Buat {num} soal pilihan ganda.\n\
TOPIK: {topic}.\n\
PENTING: Soal harus relevan, menantang (setara S1 Manajemen), dan fokus pada aplikasi konsep, bukan hanya hafalan.\n\
ATURAN KUALITAS DISTRAKTOR (SANGAT KRITIS):\n\
1.  **KESETARAAN PANJANG:** Panjang kalimat antara jawaban benar dan semua jawaban salah HARUS serupa.\n\
2.  **KOMPLEKSITAS SERUPA:** Distraktor HARUS menggunakan terminologi dan struktur kalimat yang sama kompleksnya.\n\
3.  **PLAUSIBILITAS:** Distraktor harus merupakan kesalahan umum yang logis.\n\
4.  **HINDARI KATA KUNCI:** Jangan gunakan \"selalu\", \"tidak pernah\", \"hanya\".\n\
ATURAN FORMATTING:\n\
JANGAN GUNAKAN FORMAT LATEX (tanda $ atau \\rightarrow). Gunakan simbol teks biasa atau Unicode (misal: \"->\").\n\
Anda HARUS mengembalikan jawaban HANYA dalam format JSON yang valid.\n\
Pastikan ada 5 pilihan jawaban (A, B, C, D, E) untuk setiap soal.\n\
Pastikan bidang 'a' adalah index (angka 0-4) dari jawaban yang benar.\n\
Pastikan bidang 'e' berisi penjelasan singkat.\n\
Pastikan bidang 't' (topik) diisi dengan kategori soal (misal: \"Keuangan\", \"SDM\")."
    );

    let user_query = format!("Buatkan saya {num} soal TKB PLN Non-Teknik tentang {topic}.");

    Prompt {
        system_instruction,
        user_query,
    }
}

/// Prompt for the deep-explanation surface.
pub fn explanation_prompt(question: &str, base_explanation: &str) -> Prompt {
    let system_instruction = "Anda adalah Profesor Manajemen. Jelaskan konsep ini secara mendalam, analogi, dan contoh nyata (PLN/BUMN).\n\
JANGAN ulangi penjelasan dasar.\n\
ATURAN FORMATTING: JANGAN GUNAKAN LATEX. Gunakan teks biasa."
        .to_string();

    let user_query = format!(
        "Soal: \"{question}\"\nPenjelasan dasar: \"{base_explanation}\"\nBerikan penjelasan mendalam."
    );

    Prompt {
        system_instruction,
        user_query,
    }
}

/// Prompt for the quiz-result performance analysis.
///
/// `answers_json` is the caller-submitted answers structure, already
/// serialized for embedding.
pub fn analysis_prompt(answers_json: &str) -> Prompt {
    let system_instruction = "Anda adalah Analis Performa Rekrutmen. Analisis hasil kuis TKB BUMN.\n\
BERIKAN ANALISIS YANG MENDALAM:\n\
1.  Identifikasi kategori soal kuat/lemah.\n\
2.  Pujian untuk jawaban benar sulit.\n\
3.  Jelaskan kesalahan konsep untuk jawaban salah.\n\
4.  Saran konkret.\n\
ATURAN FORMATTING: JANGAN GUNAKAN LATEX. Gunakan teks biasa."
        .to_string();

    let user_query = format!("Analisis hasil ini:\n{answers_json}");

    Prompt {
        system_instruction,
        user_query,
    }
}
