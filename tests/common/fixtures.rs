//! CSV fixtures for file-backed alias data.

use std::path::PathBuf;
use tempfile::TempDir;

pub const DATASET_CSV: &str = "\
node_id,name,id,node_type
652,bourbon,1,liquor
653,bourbon whiskey,2,liquor
2135,dry red wine,3,liquor
2153,dry wine,4,liquor
777,burgundy wine,5,liquor
1089,cheese,6,ingredient
1083,cheddar cheese,7,ingredient
361,beef,8,ingredient
1138,chicken,9,ingredient
9001,limonene,10,compound
";

pub const ALIAS_CSV: &str = "\
canonical_name,korean_alias
bourbon,버번
bourbon_whiskey,버번 위스키
dry_red_wine,레드 와인
cheese,치즈
cheddar_cheese,체다 치즈
beef,소고기
";

pub struct DataFiles {
    pub alias_table: PathBuf,
    pub dataset: PathBuf,
    _dir: TempDir,
}

pub fn write_data_files() -> DataFiles {
    let dir = TempDir::new().expect("create temp dir");
    let alias_table = dir.path().join("korean_aliases.csv");
    let dataset = dir.path().join("nodes.csv");
    std::fs::write(&alias_table, ALIAS_CSV).expect("write alias table");
    std::fs::write(&dataset, DATASET_CSV).expect("write dataset");

    DataFiles {
        alias_table,
        dataset,
        _dir: dir,
    }
}
