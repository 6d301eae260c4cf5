//! Embedded sample text, analyzed whenever the requested source fails.

use super::RawDocument;
use zhfreq_types::Origin;

/// An introductory paragraph about artificial intelligence. It repeats a
/// handful of multi-character terms, so it always yields a non-empty ranking.
pub const SAMPLE_TEXT: &str = "人工智能是一门旨在使计算机系统能够模拟、延伸和扩展人类智能的技术科学。它涵盖了机器学习、自然语言处理、计算机视觉、专家系统等多个领域。机器学习是人工智能的核心，通过让计算机从数据中学习模式，而无需显式编程。深度学习作为机器学习的一个分支，使用神经网络模拟人脑结构，在图像识别、语音识别等领域取得了突破性进展。自然语言处理则专注于让计算机理解和生成人类语言，如聊天机器人、机器翻译等应用。人工智能的发展已经深刻影响了医疗、金融、交通、教育等各行各业，未来还将继续推动社会的数字化转型。";

/// The sample wrapped as a raw document.
pub fn sample_document() -> RawDocument {
    RawDocument::new(Origin::Sample, SAMPLE_TEXT)
}
