//! Prompt construction for the remote generation path.

use crate::profile::ProfileInput;

/// Build the fixed Japanese consultation prompt from structured profile
/// fields. The whole profile is embedded as a single user turn.
pub fn build_prompt(profile: &ProfileInput) -> String {
    let age = profile
        .age
        .map(|age| age.to_string())
        .unwrap_or_default();

    format!(
        "あなたはマッチングアプリのスペシャリストとして振る舞ってください。\n\
         マッチングアプリのスペシャリストさん、初めまして！\n\
         \n\
         今回マッチングした相手への初回メッセージと今後のアプローチ方法についてアドバイスをください。\n\
         \n\
         相手のプロフィール情報は以下の通りです。\n\
         \n\
         【相手の基本情報】\n\
         年齢：[{}]\n\
         居住地：[{}]\n\
         職業：[{}]\n\
         \n\
         【共通点】\n\
         [{}]\n\
         \n\
         【自己紹介文】\n\
         [{}]\n\
         \n\
         これらの情報から、最適な初回メッセージと、その後のアプローチ方法を具体的に教えてください。\
         メッセージ例も複数いただけると嬉しいです！",
        age,
        profile.location,
        profile.occupation,
        profile.hobby_tags.join(", "),
        profile.self_introduction,
    )
}
