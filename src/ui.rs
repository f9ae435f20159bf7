// src/ui.rs

/// ヘッダーに出す FPS 表示。
pub fn fps_text(fps: u64) -> String {
  format!("FPS: {}", fps)
}

/// ウィンドウのタイトルバーにヘッダーの文字列を並べる。
pub fn window_title(title: &str, heading: &str) -> String {
  if heading.is_empty() {
    title.to_string() // 最初のサンプルまではタイトルのみ
  } else {
    format!("{} | {}", title, heading)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fps_text() {
    assert_eq!(fps_text(0), "FPS: 0");
    assert_eq!(fps_text(60), "FPS: 60");
  }

  #[test]
  fn test_window_title() {
    assert_eq!(window_title("Mover", "FPS: 60"), "Mover | FPS: 60");
    assert_eq!(window_title("Mover", ""), "Mover");
  }
}
